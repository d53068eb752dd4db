//! Scripted agent that answers on behalf of a creator.
//!
//! There is no model behind this. An utterance is lowercased and checked
//! against [`RULES`] in order; the first rule with a keyword contained in
//! the utterance decides the [`Intent`], and the configured [`Persona`]
//! turns that intent into a reply with the creator's name filled in.
//! Utterances matching no rule get the fallback reply, so [`respond`]
//! always produces a string.

use serde::Deserialize;

use crate::types::User;

/// What the visitor is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Portfolio,
    TechStack,
    Contact,
    Experience,
    Greeting,
    Fallback,
}

/// One entry in the decision list.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub intent: Intent,
    /// Lowercase substrings; any one of them triggers the rule
    pub keywords: &'static [&'static str],
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Decision list, highest priority first.
pub const RULES: [Rule; 5] = [
    Rule {
        intent: Intent::Portfolio,
        keywords: &["作品", "项目"],
    },
    Rule {
        intent: Intent::TechStack,
        keywords: &["技术", "技能", "栈"],
    },
    Rule {
        intent: Intent::Contact,
        keywords: &["联系", "微信", "邮箱", "合作"],
    },
    Rule {
        intent: Intent::Experience,
        keywords: &["工作", "经验", "背景"],
    },
    Rule {
        intent: Intent::Greeting,
        keywords: &["你好", "hi", "hello"],
    },
];

/// Classify an utterance. First matching rule wins.
pub fn classify(utterance: &str) -> Intent {
    let lowered = utterance.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map_or(Intent::Fallback, |rule| rule.intent)
}

/// Which built-in assistant answers for creators.
///
/// Both personas share [`RULES`]; they differ in tone and in how much they
/// are willing to say about contacting the creator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Friendly helper that introduces the creator's work
    #[default]
    Helper,
    /// Guarded assistant that only shares public information
    Gatekeeper,
}

/// Descriptive card shown above the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaProfile {
    pub name: &'static str,
    pub personality: &'static str,
    pub knowledge: &'static [&'static str],
    pub contact_rules: &'static str,
}

const HELPER_PROFILE: PersonaProfile = PersonaProfile {
    name: "AI助手小明",
    personality: "友好、专业、乐于助人",
    knowledge: &[
        "创作者的作品集和技术栈",
        "创作者的工作经验和技能",
        "如何联系创作者",
    ],
    contact_rules: "只有在访客表现出真诚的合作意向时，才会提供微信/邮箱等私密联系方式",
};

const GATEKEEPER_PROFILE: PersonaProfile = PersonaProfile {
    name: "AI助理阿守",
    personality: "谨慎、简洁、重视隐私",
    knowledge: &["创作者公开发布的作品", "创作者公开的技术栈"],
    contact_rules: "不提供任何私密联系方式，访客需先说明身份和合作目的，由创作者本人决定是否回复",
};

impl Persona {
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Helper => "helper",
            Persona::Gatekeeper => "gatekeeper",
        }
    }

    pub fn profile(&self) -> &'static PersonaProfile {
        match self {
            Persona::Helper => &HELPER_PROFILE,
            Persona::Gatekeeper => &GATEKEEPER_PROFILE,
        }
    }

    /// First message of every chat.
    pub fn opening(&self, creator: &str) -> String {
        let agent = self.profile().name;
        match self {
            Persona::Helper => format!(
                "你好！我是 {creator} 的AI助手 {agent}。我可以帮你了解 {creator} 的作品和专业背景。有什么我可以帮助你的吗？"
            ),
            Persona::Gatekeeper => format!(
                "你好，我是 {creator} 的助理 {agent}。出于隐私考虑，我只回答与 {creator} 公开作品相关的问题。"
            ),
        }
    }

    /// Reply template for `intent`, with the creator's name filled in.
    pub fn reply(&self, intent: Intent, creator: &str) -> String {
        match self {
            Persona::Helper => helper_reply(intent, creator),
            Persona::Gatekeeper => gatekeeper_reply(intent, creator),
        }
    }
}

impl std::str::FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "helper" => Ok(Persona::Helper),
            "gatekeeper" => Ok(Persona::Gatekeeper),
            _ => Err(format!("unknown persona: {}", s)),
        }
    }
}

fn helper_reply(intent: Intent, n: &str) -> String {
    match intent {
        Intent::Portfolio => format!(
            "{n} 目前在平台上发布了多个优秀作品，包括番茄钟工具、AI文案生成器等。这些作品涵盖了前端开发、工具应用等多个领域。你可以在TA的主页查看完整的作品集。"
        ),
        Intent::TechStack => format!(
            "{n} 精通 Web 开发技术栈，包括 React、Vue.js、TypeScript 等前端技术，同时也熟悉 Python、Node.js 等后端技术。TA特别擅长开发创意型的小应用和工具。"
        ),
        Intent::Contact => format!(
            "感谢你对 {n} 的关注！为了保护创作者的隐私，我需要了解更多关于你的合作意向。请问你具体希望在哪个方面与 {n} 合作呢？（例如：项目合作、技术交流、工作机会等）"
        ),
        Intent::Experience => format!(
            "{n} 是一位经验丰富的开发者，专注于创造有趣且实用的 Web 应用。TA在用用平台上分享了许多优秀的开源项目，深受社区喜爱。"
        ),
        Intent::Greeting => format!(
            "你好！很高兴为你服务。我可以帮你了解 {n} 的作品、技能、工作经验等信息。你想了解什么呢？"
        ),
        Intent::Fallback => format!(
            "我理解你的问题。关于 {n}，我可以为你介绍TA的作品集、技术能力、以及如何与TA取得联系。你最感兴趣的是哪个方面呢？"
        ),
    }
}

fn gatekeeper_reply(intent: Intent, n: &str) -> String {
    match intent {
        Intent::Portfolio => format!("{n} 的公开作品都在TA的主页上，可以直接查看。"),
        Intent::TechStack => format!(
            "{n} 主要使用 React、TypeScript 和 Python。更具体的技术细节请参考作品页面。"
        ),
        Intent::Contact => format!(
            "{n} 不公开私人联系方式。请先说明你的身份和合作目的，我会转达给 {n}，是否回复由TA本人决定。"
        ),
        Intent::Experience => format!(
            "关于 {n} 的工作经历，我只能分享公开信息：TA长期在用用平台发布 Web 作品。"
        ),
        Intent::Greeting => format!(
            "你好，我是 {n} 的助理。我可以回答关于作品和技术栈的问题。"
        ),
        Intent::Fallback => format!(
            "这个问题我无法回答。你可以问我 {n} 的作品、技术栈、工作经历，或者说明合作意向。"
        ),
    }
}

/// Reply to one utterance on behalf of `creator`.
pub fn respond(persona: Persona, creator: &User, utterance: &str) -> String {
    let intent = classify(utterance);
    tracing::debug!(persona = persona.as_str(), creator = %creator.id, ?intent, "Agent reply");
    persona.reply(intent, &creator.name)
}
