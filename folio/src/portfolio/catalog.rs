use crate::models::{
    BlogPost, CategoryFilter, Project, ProjectCategory, Skill, SkillCategory, SocialLink,
    TimelineEntry,
};

const PROJECTS: &[Project] = &[
    Project {
        id: "asr-rag",
        title: "Real-time ASR Conversational-AI RAG System",
        description: "End-to-end solution with WhisperX OpenAI for voice-to-text, speaker diarization, ChromaDB for storage/retrieval, and OpenAI GPT for RAG chatbot. Built with Gradio frontend for seamless transcript access.",
        tech: &["WhisperX", "OpenAI GPT", "ChromaDB", "RAG", "Gradio", "Speaker Diarization"],
        metrics: "Real-time voice processing with multi-speaker recognition",
        category: ProjectCategory::Genai,
        period: "Jan 2024 - Mar 2024",
        demo_available: true,
    },
    Project {
        id: "rag-risktech",
        title: "RAG Chatbot for RiskTech Analysis",
        description: "Engineered Retrieval Augmented Generation Langchain chatbot for analyzing SEC 10K and 10Q filings. Powered by Chroma-DB and WizardLM for financial document analysis.",
        tech: &["Langchain", "Chroma-DB", "WizardLM", "RAG", "SEC Filings"],
        metrics: "80% accuracy in PII obfuscation using Zero Knowledge Proof",
        category: ProjectCategory::Genai,
        period: "Oct 2023 - Dec 2023",
        demo_available: false,
    },
    Project {
        id: "gan-ocr",
        title: "GAN Models for OCR Enhancement",
        description: "Developed Real-ESRGAN and EDSR GAN models to significantly improve OCR accuracy. Researched multi-modal LLM approaches with GPT, Llama, and Falcon models.",
        tech: &["Real-ESRGAN", "EDSR GAN", "OCR", "Computer Vision", "LLMs"],
        metrics: "33% efficiency increase, 45% RAG accuracy boost",
        category: ProjectCategory::Ml,
        period: "Jun 2023 - Sep 2023",
        demo_available: false,
    },
    Project {
        id: "fraud-detection",
        title: "Credit Card Fraud Detection System",
        description: "ML-based system to detect fraudulent transactions using SMOTE for data balancing. Achieved exceptional accuracy through KNN with rigorous parameter fine-tuning.",
        tech: &["K-Nearest Neighbors", "SMOTE", "Scikit-learn", "Python", "Data Balancing"],
        metrics: "99% accuracy using K-Nearest Neighbors",
        category: ProjectCategory::Ml,
        period: "Jan 2023 - May 2023",
        demo_available: false,
    },
    Project {
        id: "facial-recognition",
        title: "Real-time Facial Recognition Security System",
        description: "Multi-layered facial recognition for identity authentication using CNN and Haar-Cascade. Transformed into Firebase-hosted SaaS for offline verification challenges.",
        tech: &["CNN", "Haar-Cascade", "Tkinter", "Firebase", "Computer Vision"],
        metrics: "92.3% accuracy, deployed as SaaS",
        category: ProjectCategory::Fullstack,
        period: "Feb 2022 - May 2022",
        demo_available: false,
    },
    Project {
        id: "data-quality",
        title: "LLM-Powered Data Quality Framework",
        description: "Built data quality framework monitoring data at rest and in motion. Implemented Isolation Forest and LLM models for validation optimization and automated anomaly detection.",
        tech: &["LLMs", "Isolation Forest", "Data Pipeline", "Monitoring", "Automation"],
        metrics: "Enhanced data reliability and traceability across pipelines",
        category: ProjectCategory::Genai,
        period: "2024",
        demo_available: false,
    },
];

const fn skill(id: &'static str, label: &'static str, category: SkillCategory, level: u8) -> Skill {
    Skill {
        id,
        label,
        category,
        level,
    }
}

const SKILLS: &[Skill] = &[
    skill("langchain", "Langchain", SkillCategory::Ai, 5),
    skill("llm", "LLMs", SkillCategory::Ai, 5),
    skill("rag", "RAG", SkillCategory::Ai, 5),
    skill("gans", "GANs", SkillCategory::Ai, 4),
    skill("prompt-eng", "Prompt Engineering", SkillCategory::Ai, 5),
    skill("embeddings", "Embeddings", SkillCategory::Ai, 4),
    skill("chromadb", "Chroma-DB", SkillCategory::Backend, 5),
    skill("pgvector", "PgVector", SkillCategory::Backend, 4),
    skill("neo4j", "Neo4j", SkillCategory::Backend, 4),
    skill("postgres", "PostgreSQL", SkillCategory::Backend, 4),
    skill("mongodb", "MongoDB", SkillCategory::Backend, 3),
    skill("aws", "AWS", SkillCategory::Cloud, 4),
    skill("sagemaker", "SageMaker", SkillCategory::Cloud, 4),
    skill("firebase", "Firebase", SkillCategory::Cloud, 3),
    skill("docker", "Docker", SkillCategory::Tools, 4),
    skill("git", "Git", SkillCategory::Tools, 5),
    skill("jupyter", "Jupyter", SkillCategory::Tools, 5),
    skill("python", "Python", SkillCategory::Backend, 5),
    skill("sql", "SQL", SkillCategory::Backend, 4),
    skill("react", "React", SkillCategory::Backend, 4),
    skill("typescript", "TypeScript", SkillCategory::Backend, 4),
];

const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        period: "2024",
        title: "AI/ML Engineer",
        organization: "Synechron Inc, New York",
        description: "Built data quality frameworks with Isolation Forest and LLM models. Developed an LLM prompt library framework to streamline generative AI use cases, improving operational efficiency and scalability.",
        skills: &["LLMs", "Langchain", "Data Quality", "Prompt Engineering"],
    },
    TimelineEntry {
        period: "2023 Q4",
        title: "Gen AI Internship",
        organization: "Synechron Inc, New York",
        description: "Engineered RAG Langchain chatbot for RiskTech analysis of SEC filings powered by Chroma-DB and WizardLM. Leveraged PgVector and Pandas-AI for Zero Knowledge Proof with 80% accuracy.",
        skills: &["RAG", "Chroma-DB", "PgVector", "WizardLM", "Pandas-AI"],
    },
    TimelineEntry {
        period: "2023 Q2-Q3",
        title: "Data Science / Gen AI Internship",
        organization: "Synechron Inc, New York",
        description: "Developed GAN models (Real-ESRGAN, EDSR GAN) for OCR accuracy. Investigated LLMs (GPT, Llama, Falcon) with multi-modal approach increasing efficiency by 33%. Enhanced RAG accuracy by 45% using chunking strategies.",
        skills: &["GANs", "OCR", "LLM Research", "Embeddings", "bge-large"],
    },
    TimelineEntry {
        period: "2024",
        title: "MS in Computer Science",
        organization: "Stevens Institute of Technology",
        description: "GPA: 3.94/4.0 | Courses: Math Foundation of ML, Knowledge Discovery and Data Mining, Data Structures and Algorithms",
        skills: &["Machine Learning", "Data Mining", "Algorithms"],
    },
    TimelineEntry {
        period: "2021",
        title: "Machine Learning Internship",
        organization: "Eamvey Technologies, India",
        description: "Created sales prediction models using Linear regression and Perceptron, achieving 30% accuracy increase. Deployed on AWS SageMaker.",
        skills: &["Linear Regression", "AWS SageMaker", "Model Deployment"],
    },
];

const POSTS: &[BlogPost] = &[
    BlogPost {
        id: "1",
        title: "Building Agentic AI for Businesses",
        excerpt: "A deep dive into creating intelligent AI agents that can handle complex business workflows using RAG and LLMs...",
        date: "Oct 2024",
        read_time: "8 min read",
        category: "GenAI",
    },
    BlogPost {
        id: "2",
        title: "Cloud GenAI Interview Questions",
        excerpt: "Comprehensive guide to preparing for GenAI engineering interviews, covering LLMs, vector databases, and cloud deployments...",
        date: "Sep 2024",
        read_time: "12 min read",
        category: "Career",
    },
    BlogPost {
        id: "3",
        title: "Optimizing RAG Systems for Production",
        excerpt: "Best practices for deploying retrieval-augmented generation systems at scale with performance benchmarks...",
        date: "Aug 2024",
        read_time: "10 min read",
        category: "GenAI",
    },
    BlogPost {
        id: "4",
        title: "Multi-Cloud ML Deployment Strategies",
        excerpt: "How to architect ML pipelines that work seamlessly across Azure, AWS, and GCP with cost optimization...",
        date: "Jul 2024",
        read_time: "15 min read",
        category: "Cloud",
    },
];

const LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        url: "https://github.com/kaarthiks24",
    },
    SocialLink {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/kaarthik-senthil-kumar/",
    },
    SocialLink {
        name: "Email",
        url: "mailto:kaarthiks24@gmail.com",
    },
];

/// Read-only view over the portfolio content. Filters are passed per call;
/// the catalog itself holds no selection state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn projects(&self, filter: CategoryFilter<ProjectCategory>) -> Vec<&'static Project> {
        PROJECTS
            .iter()
            .filter(|p| filter.matches(&p.category))
            .collect()
    }

    pub fn project(&self, id: &str) -> Option<&'static Project> {
        PROJECTS.iter().find(|p| p.id == id)
    }

    pub fn skills(&self, filter: CategoryFilter<SkillCategory>) -> Vec<&'static Skill> {
        SKILLS
            .iter()
            .filter(|s| filter.matches(&s.category))
            .collect()
    }

    pub fn timeline(&self) -> &'static [TimelineEntry] {
        TIMELINE
    }

    pub fn posts(&self) -> &'static [BlogPost] {
        POSTS
    }

    pub fn links(&self) -> &'static [SocialLink] {
        LINKS
    }
}
