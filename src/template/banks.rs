//! Built-in word banks and template sets.
//!
//! Two sets ship with the crate: a short supportive-comment set and a
//! longer question-post set. Both are fixed data; callers wanting different
//! vocabularies build their own [`TemplateSet`].

use super::{TemplateSet, WordBank};

/// Short supportive comments for replies under a target post.
pub fn supportive_comment_set() -> TemplateSet {
    let base = [
        "Thanks for sharing this",
        "Great post",
        "Really insightful",
        "Appreciate the breakdown",
        "Solid take",
        "Well said",
        "This is spot on",
        "Helpful perspective",
        "Valuable thoughts",
        "Thanks for posting",
        "Good information",
        "Nice post",
        "Excellent points",
        "Love reading this",
        "Always enjoy your takes",
        "Super useful",
        "Clear and concise",
        "Spot-on analysis",
        "This resonates",
        "Important topic",
        "Glad you brought this up",
        "Thought-provoking stuff",
        "Quality content as always",
        "Keep it coming",
        "Exactly what I was thinking",
        "Couldn't agree more",
        "This needs more attention",
        "Well articulated",
        "On point",
        "Great summary",
        "Thanks for the update",
        "Always learn something here",
        "Strong points",
        "This hits the mark",
        "Appreciate the insight",
        "Very well explained",
        "Right on target",
    ];

    let topic = [
        "this topic is underrated",
        "this topic deserves more attention",
        "this topic is fascinating",
        "the implications of this topic are huge",
        "this topic needs more discussion",
        "this topic is exactly what the space needs",
        "love seeing focus on this topic",
        "the second-order effects of this topic are worth watching",
        "this topic provides a helpful framework",
        "great way to approach this topic",
        "the incentives around this topic are key",
        "this topic is evolving fast",
        "these trade-offs in this topic are critical",
        "perfect timing on this topic",
        "this topic brings much-needed clarity",
        "the broader context of this topic matters",
        "the nuance in this topic is important",
        "this topic adds real value",
        "the long-term view on this topic is crucial",
        "the opportunities in this topic are massive",
        "this topic is worth digging deeper into",
        "this topic opens new doors",
    ];

    let addition = [
        "as always",
        "once again",
        "right on time",
        "no surprise here",
        "definitely",
        "absolutely",
        "100%",
        "for sure",
        "indeed",
        "totally",
        "exactly",
        "precisely",
        "spot on",
        "no doubt",
        "without question",
    ];

    let emoji = [
        "\u{1F525}", "\u{1F4AF}", "\u{1F680}", "\u{1F914}", "\u{1F440}", "\u{2705}",
        "\u{1F64C}", "\u{1F44D}", "\u{2764}\u{FE0F}", "\u{1F4AD}", "\u{1F9E0}", "\u{1F4C8}",
        "\u{1F31F}", "\u{26A1}", "\u{1F50D}", "\u{1F4A1}", "\u{1F44F}", "\u{1F3AF}",
        "\u{2728}", "\u{1F310}", "\u{1F4CA}", "\u{1F64F}",
    ];

    TemplateSet::new()
        .with_templates([
            "{{base}}",
            "{{base}} {{emoji}}",
            "{{base}}. {{topic}}",
            "{{base}}. {{topic}} {{emoji}}",
            "{{base}}, {{topic}}",
            "{{base}} {{addition}}, {{topic}}",
            "{{base}} {{emoji}} {{emoji}}",
            "{{base}} {{addition}}",
            "{{topic}} {{emoji}}",
            "{{base}}. {{topic}} {{addition}} {{emoji}}",
            "{{base}} {{emoji}} {{topic}}",
            "Agreed. {{topic}}",
            "Exactly. {{topic}} {{emoji}}",
            "This. {{topic}}",
            "Yes, {{topic}}",
            "{{base}}. Keep posting this kind of content {{emoji}}",
            "Appreciate posts like this {{emoji}}",
            "More of this please {{emoji}}",
            "One of the better takes on this {{emoji}}",
            "{{topic}}. {{base}}",
            "Great to see {{topic}} {{emoji}}",
            "{{base}}, especially {{topic}}",
            "Solid content. {{topic}} {{emoji}}",
            "Thanks for highlighting {{topic}}",
        ])
        .with_bank(WordBank::new("base", base))
        .with_bank(WordBank::new("topic", topic))
        .with_bank(WordBank::new("addition", addition))
        .with_bank(WordBank::new("emoji", emoji))
}

/// Open-ended question posts for top-level publishing when no external
/// content source is configured.
pub fn question_post_set() -> TemplateSet {
    let topic = [
        "Bitcoin halving dynamics",
        "Ethereum restaking mechanics",
        "Layer-2 adoption curves",
        "Real-World-Assets tokenization",
        "zero-knowledge proving systems",
        "modular blockchain architecture",
        "account abstraction wallet design",
        "intent-centric transaction flows",
        "cross-chain liquidity pathways",
        "crypto user acquisition funnels",
        "smart contract security models",
        "on-chain identity frameworks",
        "stablecoin settlement networks",
        "crypto social graphs",
        "blockchain data availability layers",
        "Web3 gaming ecosystems",
        "NFT utility frameworks",
        "cryptographic wallet recovery",
        "proof-of-stake security assumptions",
        "crypto UX simplicity challenges",
        "on-chain reputation scoring",
        "governance minimization models",
        "cross-border stablecoin rails",
        "interoperability standards",
        "decentralized identity adoption",
        "crypto market structure evolution",
        "decentralized social coordination",
        "AI agent ecosystems",
        "multimodal reasoning breakthroughs",
        "synthetic data generation models",
        "on-device inference hardware",
        "large context window models",
        "AI regulatory frameworks",
        "AI-assisted scientific discovery",
        "AI in enterprise workflows",
        "digital twin infrastructure",
        "model distillation techniques",
        "AI energy consumption trends",
        "open-source AI innovation curves",
        "reinforcement learning deployment",
        "multi-agent cooperation dynamics",
        "AI reasoning reliability",
        "semantic search systems",
        "edge AI capabilities",
        "AI-powered cybersecurity",
        "global liquidity cycles",
        "fiscal policy constraints",
        "energy transition bottlenecks",
        "sovereign debt dynamics",
        "interest rate policy cycles",
        "inflation expectations re-pricing",
        "global supply chain rewiring",
        "central bank digital currencies",
        "productivity growth patterns",
        "labor market transformations",
        "geopolitical risk premiums",
        "global trade fragmentation",
        "demographic aging",
        "monetary easing cycles",
        "creator economy monetization",
        "subscription fatigue dynamics",
        "remote-first workforce design",
        "consumer digital behavior shifts",
        "startup unit economics discipline",
        "business model defensibility",
        "founder decision psychology",
        "product-market fit signals",
        "customer lifetime value drivers",
        "digital identity formation",
        "information overload psychology",
        "trust in digital institutions",
        "online community governance",
        "collective intelligence systems",
        "behavioral finance biases",
        "technology adoption S-curves",
    ];

    let opener = [
        "How might",
        "What if",
        "Why could",
        "To what extent might",
        "Is it possible that",
        "What happens when",
        "In which scenarios could",
        "What factors determine whether",
        "Where might",
        "How should innovators think about",
        "Why might builders explore",
        "What leads to",
        "Could it be that",
        "How do we evaluate whether",
        "What forces drive",
        "Should we expect",
        "What signals indicate whether",
        "When does it make sense for",
        "What challenges emerge when",
        "How could future trends influence",
        "What frameworks best explain",
        "How do strategic incentives shape",
        "What tensions arise when",
        "What second-order effects follow if",
        "Which uncertainties define",
        "How should decision-makers assess",
        "What blind spots exist around",
        "Where do the biggest risks lie within",
        "How do cultural dynamics influence",
        "What structural forces shape",
        "Why do stakeholders care about",
        "What underlying mechanisms govern",
        "Could long-term trends suggest",
        "Why is it important to evaluate",
        "What new opportunities open if",
        "How does policy evolution affect",
    ];

    let middle = [
        "shifts global adoption patterns",
        "reshapes incentives across ecosystems",
        "changes user behavior in unexpected ways",
        "accelerates innovation cycles",
        "introduces new strategic considerations",
        "redefines competitive landscapes",
        "interacts with emerging regulation",
        "creates downstream consequences",
        "impacts developer experience",
        "scales beyond early adopters",
        "changes capital allocation frameworks",
        "modifies long-term expectations",
        "collides with geopolitical constraints",
        "triggers organizational redesign",
        "reshapes market infrastructure",
        "forces re-evaluation of existing assumptions",
        "intersects with demographic change",
        "reshapes institutional priorities",
    ];

    let closer = [
        "and what should observers pay attention to next?",
        "and which groups are positioned to benefit?",
        "and what long-term implications might emerge?",
        "and how can participants prepare effectively?",
        "and which early signals matter most?",
        "and what uncertainties remain unresolved?",
        "and how might this influence future innovation?",
        "and what second-order effects could follow?",
        "and how could this reshape strategic decisions?",
        "and what frameworks help interpret these shifts?",
    ];

    let tone = [
        "curious",
        "balanced",
        "analytical",
        "research-oriented",
        "open-minded",
    ];

    let emoji = ["\u{1F52D}", "\u{1F9E0}", "\u{1F50D}", "\u{1F4A1}", "\u{1F4AD}"];

    TemplateSet::new()
        .with_templates([
            "{{opener}} {{topic}} {{middle}}, {{closer}}",
            "Considering {{topic}}, {{opener.lower}} it {{middle}}, {{closer}}",
            "A useful strategic question: {{opener}} {{topic}} {{middle}}? {{closer}}",
            "As the landscape evolves, {{opener.lower}} {{topic}} {{middle}}, {{closer}} ({{tone}})",
            "{{opener}} {{topic}} {{middle}}; {{closer}} {{emoji}}",
            "When examining {{topic}}, a key question is: {{opener.lower}} it {{middle}}, {{closer}}",
            "In thinking about the future of {{topic}}, {{opener.lower}} {{middle}}, {{closer}}",
            "If {{topic}} continues to gain relevance, {{opener.lower}} it {{middle}}, {{closer}}",
            "{{opener}} the trajectory of {{topic}} {{middle}}, {{closer}}",
        ])
        .with_bank(WordBank::new("topic", topic))
        .with_bank(WordBank::new("opener", opener))
        .with_bank(WordBank::new("middle", middle))
        .with_bank(WordBank::new("closer", closer))
        .with_bank(WordBank::new("tone", tone))
        .with_bank(WordBank::new("emoji", emoji))
}
