//! Built-in content: challenge prompts, quiz, progress areas and the home page.

use crate::domain::{ProgressArea, QuizQuestion};

/// The fixed pool a daily challenge is drawn from.
pub const CHALLENGE_PROMPTS: [&str; 5] = [
  "Write three things you are grateful for today.",
  "Reflect on a recent failure and identify the lesson learned.",
  "Challenge yourself to learn something new today.",
  "Step out of your comfort zone – try a new activity.",
  "Encourage someone with a growth mindset message.",
];

pub const QUIZ: [QuizQuestion; 2] = [
  QuizQuestion {
    question: "What is a growth mindset?",
    options: ["Fixed abilities", "Continuous learning", "Avoiding challenges"],
    answer: "Continuous learning",
  },
  QuizQuestion {
    question: "How should you view criticism?",
    options: ["Ignore it", "Use it to grow", "Take it personally"],
    answer: "Use it to grow",
  },
];

pub const PROGRESS_AREAS: [ProgressArea; 5] = [
  ProgressArea {
    name: "Handling Challenges",
    levels: ["Avoids Challenges", "Attempts Sometimes", "Seeks Challenges"],
  },
  ProgressArea {
    name: "Receiving Feedback",
    levels: ["Ignores Feedback", "Considers Feedback", "Implements Feedback"],
  },
  ProgressArea {
    name: "Skill Development",
    levels: ["Sticks to Comfort Zone", "Explores Occasionally", "Consistently Grows"],
  },
  ProgressArea {
    name: "Resilience to Failure",
    levels: ["Gives Up", "Tries Again", "Adapts and Improves"],
  },
  ProgressArea {
    name: "Learning from Others",
    levels: ["Feels Intimidated", "Observes and Learns", "Collaborates & Grows"],
  },
];

pub struct HomeContent {
  pub title: &'static str,
  pub heading: &'static str,
  pub image_url: &'static str,
  pub why: &'static str,
  pub how_to: [&'static str; 4],
  pub quote: &'static str,
}

pub const HOME: HomeContent = HomeContent {
  title: "Elevate Your Mindset: A Journey to Growth & Success",
  heading: "Welcome to the Growth Mindset Hub!",
  image_url: "https://media.istockphoto.com/id/1128571392/photo/self-development-motivational-words-quotes-concept.jpg?s=612x612&w=0&k=20&c=UGtd_Udk2a5jc3UiLyvYHlseKwPUZDV2J54d7FLR9Zg=",
  why: "A growth mindset helps you embrace challenges, learn from mistakes, and persist despite obstacles.",
  how_to: [
    "Set learning goals rather than performance goals.",
    "View challenges as opportunities to grow.",
    "Learn from criticism and feedback.",
    "Cultivate resilience and adaptability.",
  ],
  quote: "Your potential is limitless when you believe in growth.",
};

/// Footer shown under the growth snapshot.
pub const GROWTH_INSIGHT: &str =
  "Consistently track your progress and make small improvements each day!";
