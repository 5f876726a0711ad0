use super::rules::{Rule, RuleTable};

const GREETING: &str =
    "Hi! I'm your AI assistant. Ask me about Kaarthik's experience, projects, or skills!";

const PRESET_QUESTIONS: [&str; 4] = [
    "Tell me about Synechron experience",
    "What GenAI projects have you built?",
    "What are your key skills?",
    "Tell me about your education",
];

const FALLBACK: &str = "I can tell you about Kaarthik's experience at Synechron, his GenAI projects, technical skills, education, or how to contact him. What would you like to know?";

/// Everything a chat session needs to know about what to say: the greeting
/// seeded into every transcript, the suggested questions and the answers.
#[derive(Debug, Clone)]
pub struct ChatScript {
    pub greeting: String,
    pub presets: Vec<String>,
    pub rules: RuleTable,
}

impl ChatScript {
    pub fn preset(&self, index: usize) -> Option<&str> {
        self.presets.get(index).map(String::as_str)
    }
}

impl Default for ChatScript {
    fn default() -> Self {
        Self {
            greeting: GREETING.to_string(),
            presets: PRESET_QUESTIONS.iter().map(|q| q.to_string()).collect(),
            rules: default_rules(),
        }
    }
}

fn default_rules() -> RuleTable {
    RuleTable::new(
        vec![
            Rule::new(
                ["synechron", "work", "experience"],
                "Kaarthik is currently an AI/ML Engineer at Synechron Inc (NYC) since June 2024. He built data quality frameworks with Isolation Forest and LLM models, and developed an LLM prompt library framework. Previously, he did 2 internships there focusing on RAG systems with Chroma-DB, PgVector, GAN models for OCR, and achieved 45% RAG accuracy improvement.",
            ),
            Rule::new(
                ["project", "built"],
                "Key projects: 1) Real-time ASR Conversational-AI RAG System with WhisperX and ChromaDB, 2) RAG Chatbot for SEC filings analysis (80% PII accuracy), 3) GAN Models for OCR (33% efficiency boost), 4) Credit Card Fraud Detection (99% accuracy), 5) Facial Recognition SaaS on Firebase (92.3% accuracy).",
            ),
            Rule::new(
                ["skill", "tech", "stack"],
                "Skills: Langchain, LLMs, AWS, RAG systems, Chroma-DB, PgVector, Neo4j, Python, SQL, React, Django, Docker, Git. Specialized in GANs, transformers, and prompt engineering. Microsoft Certified Azure AI-900 and Google Cloud GenAI fundamentals.",
            ),
            Rule::new(
                ["education", "degree", "stevens"],
                "MS in Computer Science from Stevens Institute of Technology (GPA: 3.94/4.0, May 2024). Courses: Math Foundation of ML, Knowledge Discovery, Data Mining, Algorithms. BE in CSE from Rajalakshmi Engineering College (CGPA: 3.47/4, June 2022).",
            ),
            Rule::new(
                ["contact", "hire", "reach"],
                "You can reach Kaarthik at: kaarthiks24@gmail.com | +1 (609)-288-2889 | Charlotte, NC. Connect on GitHub: kaarthiks24 or LinkedIn: kaarthik-senthil-kumar. Open to full-time, contract, and remote opportunities!",
            ),
            Rule::new(
                ["rag", "llm", "genai"],
                "Kaarthik specializes in GenAI with extensive experience in RAG systems, LLMs (GPT, Llama, Falcon, WizardLM), vector databases (Chroma-DB, PgVector), and Langchain. He's built production RAG chatbots for financial analysis and improved RAG accuracy by 45% using advanced chunking strategies.",
            ),
        ],
        FALLBACK,
    )
}
