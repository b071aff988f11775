// src/domain/content.rs
//
// Static copy for the landing page.

pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Benefit {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: &'static str,
}

pub struct Step {
    pub number: u8,
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub tone: &'static str,
}

impl Testimonial {
    /// First letter of the author's name, shown in the avatar bubble.
    pub fn initial(&self) -> char {
        self.author.chars().next().unwrap_or('?')
    }
}

/// Icons the landing copy refers to; rendered by `templates::components::icons`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Eye,
    Zap,
    Target,
    Users,
    Search,
}

pub struct ShowcaseImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const FAQS: &[FaqItem] = &[
    FaqItem {
        question: "Is WisePick free to use?",
        answer: "Yes! The core features of WisePick, including product comparisons, reviews, and recommendations, are completely free for all users.",
    },
    FaqItem {
        question: "How are recommendations tailored to my preferences?",
        answer: "WisePick learns your buyer style and past choices to suggest products that best fit your needs, whether you're budget-focused, premium, or eco-conscious.",
    },
    FaqItem {
        question: "Can I compare prices and reviews for any type of product?",
        answer: "Absolutely! WisePick supports a wide range of categories like electronics, clothing, accessories, and more, all in one app.",
    },
    FaqItem {
        question: "What makes WisePick different from other review or shopping apps?",
        answer: "WisePick unifies reviews and prices in a single, clutter-free interface and delivers personalized, AI-powered insights so every shopper finds what's right for them instantly.",
    },
];

pub const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: Icon::Eye,
        title: "Unified Interface",
        description: "All reviews. All prices. One place. Make decisions in seconds, not hours!",
        tone: "tone-rose",
    },
    Benefit {
        icon: Icon::Zap,
        title: "Minimalist UX",
        description: "Zero clutter. Lightning-fast. Get what you need, instantly, every time.",
        tone: "tone-plum",
    },
    Benefit {
        icon: Icon::Target,
        title: "Personalized Recommendations",
        description: "Recommendations that fit YOUR needs, budget, and preferences.",
        tone: "tone-night",
    },
];

pub const STEPS: &[Step] = &[
    Step {
        number: 1,
        icon: Icon::Users,
        title: "Tell us your shopper style",
        description: "Share your preferences, budget, and shopping priorities",
    },
    Step {
        number: 2,
        icon: Icon::Search,
        title: "Search any product",
        description: "Browse through thousands of products across all categories",
    },
    Step {
        number: 3,
        icon: Icon::Zap,
        title: "Get instant insights",
        description: "Receive reviews, prices and personalized recommendations instantly",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "Finally, an app that knows what I want. WisePick's recommendations actually match my budget and needs. Shopping has never been this easy!",
        author: "Krishna",
        role: "Budget Buyer",
        tone: "tone-rose",
    },
    Testimonial {
        text: "Most shopping apps overwhelm me, but WisePick's clean design is a breath of fresh air. I see what matters instantly, and the personalized picks always fit my style!",
        author: "Sneha P.",
        role: "Fashion Shopper",
        tone: "tone-plum",
    },
    Testimonial {
        text: "The AI summaries are a game changer. In seconds, I know the key pros and cons, so I can shop confidently without second guessing.",
        author: "Rahul K.",
        role: "Busy Professional",
        tone: "tone-night",
    },
];

pub const SHOWCASE: &[ShowcaseImage] = &[
    ShowcaseImage {
        src: "https://images.pexels.com/photos/1649771/pexels-photo-1649771.jpeg?auto=compress&cs=tinysrgb&w=400",
        alt: "Fashion",
    },
    ShowcaseImage {
        src: "https://images.pexels.com/photos/788946/pexels-photo-788946.jpeg?auto=compress&cs=tinysrgb&w=400",
        alt: "Electronics",
    },
    ShowcaseImage {
        src: "https://images.pexels.com/photos/1927259/pexels-photo-1927259.jpeg?auto=compress&cs=tinysrgb&w=400",
        alt: "Accessories",
    },
    ShowcaseImage {
        src: "https://images.pexels.com/photos/1464625/pexels-photo-1464625.jpeg?auto=compress&cs=tinysrgb&w=400",
        alt: "Beauty",
    },
];
