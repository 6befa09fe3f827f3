//! Static Content
//!
//! Marketing and dashboard copy as const tables. Everything here is
//! presentational data with no behavior attached.

/// Landing page anchor link.
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Features", target: "features" },
    NavLink { label: "How It Works", target: "how-it-works" },
    NavLink { label: "Pricing", target: "pricing" },
    NavLink { label: "FAQ", target: "faq" },
];

/// Landing page feature card.
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🧠",
        title: "Real-Time AI Answers",
        description: "Get instant, context-aware answers during live interviews. Avia listens and generates responses in real-time.",
    },
    Feature {
        icon: "💻",
        title: "Coding Interview Support",
        description: "Full support for LeetCode-style problems with step-by-step solutions, complexity analysis, and code generation.",
    },
    Feature {
        icon: "📄",
        title: "Resume-Aware Personalization",
        description: "Upload your resume and Avia tailors answers to match your experience, projects, and skills.",
    },
    Feature {
        icon: "🛡️",
        title: "100% Undetectable",
        description: "Works seamlessly with all major interview platforms. No screen sharing flags, no detection.",
    },
    Feature {
        icon: "🖥️",
        title: "Multi-Platform Support",
        description: "Compatible with Zoom, Google Meet, Microsoft Teams, and all browser-based interview tools.",
    },
    Feature {
        icon: "💬",
        title: "Smart Follow-Up Handling",
        description: "Intelligently handles follow-up questions and maintains context throughout your interview.",
    },
];

/// "How it works" step on the landing page.
pub struct Step {
    pub number: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: &[Step] = &[
    Step {
        number: "1",
        icon: "📄",
        title: "Setup",
        description: "Install the Avia browser extension and connect your account. Upload your resume for personalized responses.",
    },
    Step {
        number: "2",
        icon: "🖥️",
        title: "Join Interview",
        description: "Join your interview on any platform. Avia automatically detects the session and starts listening.",
    },
    Step {
        number: "3",
        icon: "🧠",
        title: "Get AI Answers",
        description: "Receive real-time AI-generated answers displayed in a discreet overlay. Copy or use them naturally.",
    },
];

/// One interview-question category in the product demo.
pub struct DemoTab {
    pub id: &'static str,
    pub label: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

pub const DEMO_TABS: &[DemoTab] = &[
    DemoTab {
        id: "system-design",
        label: "System Design",
        question: "Can you explain how you would design a URL shortener service like bit.ly?",
        answer: "Great question. I'd approach this systematically:\n\n\
Functional Requirements:\n\
- Generate short URLs from long URLs\n\
- Redirect short URLs to original URLs\n\
- Custom alias support\n\
- Analytics tracking\n\n\
High-Level Architecture:\n\
1. API Gateway - handles incoming requests, rate limiting\n\
2. Application Servers - stateless, horizontally scalable\n\
3. Key Generation Service - pre-generates unique short keys using Base62\n\
4. Database - NoSQL (DynamoDB/Cassandra) for key-value lookups\n\
5. Cache Layer - Redis for hot URLs (80/20 rule)\n\n\
Key Decisions:\n\
- Base62 encoding gives us 62^7 = 3.5 trillion unique URLs\n\
- Read-heavy system (100:1 ratio) - optimize with caching\n\
- Database sharding by hash of short URL\n\n\
Scalability: load balancer + auto-scaling groups, CDN for geographic \
distribution, database replication for read replicas.",
    },
    DemoTab {
        id: "behavioral",
        label: "Behavioral",
        question: "Tell me about a time you had to deal with a difficult team member and how you handled it.",
        answer: "Absolutely. At my previous role, I worked with a senior engineer who was \
resistant to adopting our new CI/CD pipeline.\n\n\
Situation: we were migrating from manual deployments to automated pipelines. \
One team member consistently bypassed the new process, deploying directly to production.\n\n\
Action:\n\
- I scheduled a 1-on-1 to understand their concerns\n\
- Discovered they worried about deployment speed and rollback capabilities\n\
- Collaborated to add a fast-rollback feature to our pipeline\n\
- Paired with them for a week to address workflow friction\n\n\
Result:\n\
- They became one of the strongest advocates for the new system\n\
- Deployment errors decreased by 73%\n\
- The fast-rollback feature they inspired became a standard feature\n\n\
Key takeaway: resistance often stems from unaddressed concerns. Listening first \
and collaborating on solutions creates better outcomes than enforcing compliance.",
    },
    DemoTab {
        id: "coding",
        label: "Coding",
        question: "Given an array of integers, find two numbers that add up to a specific target. What is the most efficient approach?",
        answer: "The optimal solution uses a one-pass hash map:\n\n\
def two_sum(nums, target):\n\
    seen = {}\n\
    for i, num in enumerate(nums):\n\
        complement = target - num\n\
        if complement in seen:\n\
            return [seen[complement], i]\n\
        seen[num] = i\n\
    return []\n\n\
Complexity Analysis:\n\
- Time: O(n) - single pass through the array\n\
- Space: O(n) - hash map storage\n\n\
Why not brute force? Brute force is O(n^2) with nested loops; the hash map \
trades space for time efficiency.\n\n\
Edge cases: duplicate values are handled naturally by the map, no solution \
returns an empty array, and negative numbers work without modification.",
    },
];

/// Pricing plan on the landing page.
pub struct PricingPlan {
    pub name: &'static str,
    pub monthly_price: u32,
    pub annual_price: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub highlighted: bool,
    pub badge: Option<&'static str>,
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Free",
        monthly_price: 0,
        annual_price: 0,
        description: "Perfect for getting started",
        features: &["5 interview sessions/month", "Basic AI answers", "Email support"],
        cta: "Get Started Free",
        highlighted: false,
        badge: None,
    },
    PricingPlan {
        name: "Pro",
        monthly_price: 29,
        annual_price: 19,
        description: "For serious job seekers",
        features: &[
            "Unlimited sessions",
            "Advanced AI + coding support",
            "Resume personalization",
            "Priority support",
        ],
        cta: "Start Pro Trial",
        highlighted: true,
        badge: Some("Most Popular"),
    },
    PricingPlan {
        name: "Enterprise",
        monthly_price: 79,
        annual_price: 59,
        description: "For teams and bootcamps",
        features: &[
            "Everything in Pro",
            "Team management dashboard",
            "Custom AI training",
            "Dedicated account manager",
            "API access",
        ],
        cta: "Contact Sales",
        highlighted: false,
        badge: None,
    },
];

/// User testimonial.
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub initials: &'static str,
    pub text: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Chen",
        role: "Software Engineer at Google",
        initials: "SC",
        text: "Avia helped me prepare for my Google L5 interview. The real-time coding support was a game-changer.",
    },
    Testimonial {
        name: "Marcus Johnson",
        role: "Senior Developer at Meta",
        initials: "MJ",
        text: "I was skeptical at first, but Avia's undetectable overlay gave me the confidence I needed. Landed my dream role.",
    },
    Testimonial {
        name: "Priya Sharma",
        role: "CS Graduate, Stanford",
        initials: "PS",
        text: "As a student, the free tier was perfect for practice. Upgraded to Pro for my final rounds and it was worth every penny.",
    },
];

/// FAQ entry.
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Is Avia really undetectable?",
        answer: "Yes. Avia operates as a browser extension overlay that doesn't interact with the interview platform's DOM or screen-sharing APIs. It's invisible to all major proctoring software.",
    },
    Faq {
        question: "Which interview platforms does Avia support?",
        answer: "Avia works with Zoom, Google Meet, Microsoft Teams, WebEx, and all browser-based interview platforms including HackerRank, CodeSignal, and LeetCode.",
    },
    Faq {
        question: "Can I use Avia for coding interviews?",
        answer: "Absolutely. Avia provides real-time code generation, step-by-step explanations, complexity analysis, and can even debug code snippets during live coding sessions.",
    },
    Faq {
        question: "How does the resume personalization work?",
        answer: "Upload your resume and Avia analyzes your experience, skills, and projects. During interviews, it tailors answers to match your background, making responses sound authentic and personal.",
    },
    Faq {
        question: "Is there a free trial?",
        answer: "Yes! Our Free plan includes 5 interview sessions per month with basic AI answers. No credit card required.",
    },
    Faq {
        question: "What happens if my internet connection drops?",
        answer: "Avia caches recent context locally, so brief disconnections won't affect your experience. The AI will reconnect automatically and resume where it left off.",
    },
];

/// Company shown in the trusted-by sections.
pub const COMPANY_LOGOS: &[&str] = &["Google", "Meta", "Amazon", "Microsoft", "Apple", "Netflix"];

/// Dashboard sidebar entry.
pub struct SidebarItem {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

pub const SIDEBAR_ITEMS: &[SidebarItem] = &[
    SidebarItem { id: "dashboard", icon: "🏠", label: "Dashboard" },
    SidebarItem { id: "sessions", icon: "🕑", label: "Sessions" },
    SidebarItem { id: "resume", icon: "📄", label: "Resume" },
    SidebarItem { id: "settings", icon: "⚙️", label: "Settings" },
    SidebarItem { id: "help", icon: "❓", label: "Help" },
];

/// Dashboard onboarding step card.
pub struct StepCard {
    pub number: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEP_CARDS: &[StepCard] = &[
    StepCard {
        number: "1",
        icon: "📤",
        title: "Upload Resume",
        description: "Upload your resume so Avia can personalize responses to match your experience.",
    },
    StepCard {
        number: "2",
        icon: "💻",
        title: "Choose Interview Type",
        description: "Select your interview format: System Design, Behavioral, or Coding.",
    },
    StepCard {
        number: "3",
        icon: "📈",
        title: "Create Session",
        description: "Start a new AI-powered interview practice session with real-time assistance.",
    },
    StepCard {
        number: "4",
        icon: "⭐",
        title: "Review Performance",
        description: "View your session history, AI feedback, and improvement areas.",
    },
];

/// Interview formats selectable in step 2.
pub const INTERVIEW_TYPES: &[&str] = &["System Design", "Behavioral", "Coding"];

/// "Where did you hear about us?" survey source.
pub struct SurveyOption {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

pub const SURVEY_OPTIONS: &[SurveyOption] = &[
    SurveyOption { id: "linkedin", icon: "💼", label: "LinkedIn" },
    SurveyOption { id: "twitter", icon: "🐦", label: "Twitter / X" },
    SurveyOption { id: "youtube", icon: "▶️", label: "YouTube" },
    SurveyOption { id: "reddit", icon: "👽", label: "Reddit" },
    SurveyOption { id: "github", icon: "🐙", label: "GitHub" },
    SurveyOption { id: "discord", icon: "🎮", label: "Discord" },
    SurveyOption { id: "google", icon: "🔍", label: "Google Search" },
    SurveyOption { id: "friend", icon: "🤝", label: "Friend Referral" },
];
