#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub use_case: &'static str,
    pub solution: &'static str,
    pub live_link: &'static str,
    pub code_link: &'static str,
    pub categories: &'static [&'static str],
}

impl Project {
    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| *c == category)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub responsibilities: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub label: &'static str,
    pub suffix: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavLink {
    /// Section id the link points at (`"#about"` -> `"about"`).
    pub fn section_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

pub struct SiteConfig {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub resume: &'static str,
}

pub const SITE: SiteConfig = SiteConfig {
    name: "John Doe",
    title: "AI Engineer",
    email: "contact@example.com",
    location: "Chennai, TN, India",
    resume: "/resume.pdf",
};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#skills", label: "Skills" },
    NavLink { href: "#projects", label: "Projects" },
    NavLink { href: "#experience", label: "Experience" },
    NavLink { href: "#contact", label: "Contact" },
];

pub const TYPED_STRINGS: &[&str] = &["AI Engineer", "GenAI Solutions Developer", "Cloud Enthusiast"];

pub const STATS: &[Stat] = &[
    Stat { value: 3, label: "Years of Experience", suffix: "+" },
    Stat { value: 10, label: "Projects Completed", suffix: "+" },
    Stat { value: 8, label: "Certifications", suffix: "" },
];

pub const TECHNICAL_SKILLS: &[Skill] = &[
    Skill { name: "Python", percentage: 95 },
    Skill { name: "LLMs & Prompt Engineering", percentage: 90 },
    Skill { name: "Azure OpenAI", percentage: 85 },
    Skill { name: "AWS", percentage: 80 },
    Skill { name: "Snowflake", percentage: 75 },
];

pub const PROJECT_FILTERS: &[&str] = &["All", "GenAI", "ML", "Cloud", "SaaS"];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "BondReco: AI-Powered Bond Classification",
        description: "Automated bond classification using GenAI and regulatory clause checks, shipped as a SaaS offering.",
        image: "/projects/bondreco.png",
        technologies: &["Azure OpenAI", "RAG", "LangChain", "SaaS"],
        use_case: "Finance teams needed faster ERISA classification of bond documents with less manual review.",
        solution: "A retrieval-augmented pipeline combining clause classification and compliance rules, deployed on Azure.",
        live_link: "#",
        code_link: "#",
        categories: &["GenAI", "SaaS"],
    },
    Project {
        id: 2,
        title: "Instant Loan Audit",
        description: "LLM-powered auditing of loan documents that flags risky clauses in real time.",
        image: "/projects/loan.png",
        technologies: &["Azure OpenAI", "GenAI", "Compliance AI", "Document Analysis"],
        use_case: "Lenders wanted to audit agreements quickly while catching regulatory risk.",
        solution: "Extracts key entities, flags risks and writes summary reports, cutting manual audit time by over 70%.",
        live_link: "#",
        code_link: "#",
        categories: &["GenAI", "SaaS"],
    },
    Project {
        id: 3,
        title: "Financial Statement Summarizer",
        description: "Parses and summarizes balance sheets and income statements with LLMs.",
        image: "/projects/financial.png",
        technologies: &["LangChain", "Azure OpenAI", "Streamlit", "PDF Parsing"],
        use_case: "Analysts spent hours condensing statements into briefing notes.",
        solution: "A PDF parsing front-end feeding structured prompts that return consistent summaries.",
        live_link: "#",
        code_link: "#",
        categories: &["GenAI", "SaaS"],
    },
    Project {
        id: 4,
        title: "Team Routing Engine with BM25",
        description: "A team classification engine that replaced a managed NLP service and saved over $250K a year.",
        image: "/projects/routing.png",
        technologies: &["BM25", "Lambda", "AWS S3", "Open Source"],
        use_case: "Ticket routing relied on an expensive managed classifier.",
        solution: "BM25 retrieval over historical tickets, served from Lambda with S3-backed indices.",
        live_link: "#",
        code_link: "#",
        categories: &["Cloud", "ML"],
    },
    Project {
        id: 5,
        title: "Document Digitization using GenAI on AWS",
        description: "Extracts and processes unstructured data from scanned documents with Textract and LLMs.",
        image: "/projects/document.png",
        technologies: &["AWS Textract", "GenAI", "LLM", "SageMaker", "Document AI"],
        use_case: "Enterprises needed scanned paperwork turned into structured, searchable data.",
        solution: "OCR with Textract followed by LLM extraction and summarization, scaled on SageMaker.",
        live_link: "#",
        code_link: "#",
        categories: &["GenAI", "Cloud"],
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        title: "AI Engineer | Advisory Analyst (AWS)",
        company: "Hexaware Technologies",
        period: "2024 - Present",
        responsibilities: &[
            "Design GenAI document pipelines on AWS",
            "Lead proof-of-concept delivery for enterprise clients",
        ],
    },
    Experience {
        title: "Cloud AI Engineer (AWS & Snowflake)",
        company: "Hexaware Technologies",
        period: "2023 - 2024",
        responsibilities: &[
            "Built marketplace-listed AI products on Snowflake",
            "Migrated classification workloads to serverless",
        ],
    },
    Experience {
        title: "GenAI Solutions Developer (Azure)",
        company: "Hexaware Technologies",
        period: "2022 - 2023",
        responsibilities: &[
            "Developed Azure OpenAI assistants and RAG services",
            "Automated compliance review for finance customers",
        ],
    },
];
