//! Static interview question bank.

use serde::Serialize;

use crate::models::content::QuestionType;

#[derive(Debug, Clone, Serialize)]
pub struct InterviewQuestion {
    pub id: &'static str,
    pub question: &'static str,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
}

pub const BEHAVIORAL_QUESTIONS: &[InterviewQuestion] = &[
    InterviewQuestion {
        id: "b1",
        question: "Tell me about a time when you had to work under pressure to meet a deadline.",
        question_type: QuestionType::Behavioral,
    },
    InterviewQuestion {
        id: "b2",
        question: "Describe a situation where you had to resolve a conflict with a team member.",
        question_type: QuestionType::Behavioral,
    },
    InterviewQuestion {
        id: "b3",
        question: "Give me an example of a time when you showed leadership.",
        question_type: QuestionType::Behavioral,
    },
    InterviewQuestion {
        id: "b4",
        question: "Tell me about a time when you failed and what you learned from it.",
        question_type: QuestionType::Behavioral,
    },
    InterviewQuestion {
        id: "b5",
        question: "Describe a situation where you had to adapt to significant changes.",
        question_type: QuestionType::Behavioral,
    },
    InterviewQuestion {
        id: "b6",
        question: "Tell me about a time when you went above and beyond your job responsibilities.",
        question_type: QuestionType::Behavioral,
    },
    InterviewQuestion {
        id: "b7",
        question: "Describe a situation where you had to make a difficult decision.",
        question_type: QuestionType::Behavioral,
    },
    InterviewQuestion {
        id: "b8",
        question: "Give me an example of how you handled a challenging customer or stakeholder.",
        question_type: QuestionType::Behavioral,
    },
];

pub const TECHNICAL_QUESTIONS: &[InterviewQuestion] = &[
    InterviewQuestion {
        id: "t1",
        question: "Design a URL shortening service like bit.ly. Consider scalability, availability, and performance.",
        question_type: QuestionType::Technical,
    },
    InterviewQuestion {
        id: "t2",
        question: "Design a social media feed system that can handle millions of users.",
        question_type: QuestionType::Technical,
    },
    InterviewQuestion {
        id: "t3",
        question: "How would you design a distributed cache system?",
        question_type: QuestionType::Technical,
    },
    InterviewQuestion {
        id: "t4",
        question: "Design a real-time chat application with support for group messaging.",
        question_type: QuestionType::Technical,
    },
    InterviewQuestion {
        id: "t5",
        question: "How would you design a rate limiting system for an API?",
        question_type: QuestionType::Technical,
    },
    InterviewQuestion {
        id: "t6",
        question: "Design a notification system that can send emails, SMS, and push notifications.",
        question_type: QuestionType::Technical,
    },
];
