//! Meanings of the gates, stars and spirits.

use serde::Serialize;

use crate::error::{OracleError, OracleResult};

use super::tables::{Gate, Spirit, Star};

const GATE_MEANINGS: [&str; 8] = [
    "休门属水，为休养生息之门。主休息、停顿、和平。利于休养、学习、修炼。不宜动作、出行。",
    "生门属土，为生长发育之门。主生机、发展、财利。利于求财、经商、婚姻。百事皆吉。",
    "伤门属木，为伤害损失之门。主伤病、破财、官非。不利出行、求财。宜医疗、讨债。",
    "杜门属木，为闭塞阻隔之门。主阻碍、隐藏、躲避。利于隐藏、修炼。不利出行、求财。",
    "景门属火，为光明显现之门。主文书、信息、名声。利于考试、求名、文书。不利求财。",
    "死门属土，为死亡终结之门。主死亡、终结、凶险。不利百事。宜吊丧、打猎、捕捉。",
    "惊门属金，为惊恐不安之门。主惊恐、口舌、官非。不利出行、求财。宜律师、演讲。",
    "开门属金，为开通顺利之门。主开始、通达、顺利。利于出行、求财、开业。百事皆吉。",
];

const STAR_MEANINGS: [&str; 9] = [
    "天蓬星属水，为贼星。主盗贼、暗昧、阴谋。不利正事，利于暗中行事、捕盗。",
    "天任星属土，为富星。主财富、田土、婚姻。利于求财、置业、婚嫁。百事皆吉。",
    "天冲星属木，为威星。主冲动、急躁、争斗。利于军事、竞争。不利和平事务。",
    "天辅星属木，为谋星。主智慧、谋略、辅助。利于求学、谋事、辅佐。百事皆吉。",
    "天英星属火，为明星。主文明、光彩、血光。利于文书、考试。不利武事、出行。",
    "天芮星属土，为病星。主疾病、灾祸、阴暗。不利百事。宜医疗、养病。",
    "天柱星属金，为刚星。主刚强、支撑、阻碍。利于建筑、支撑。不利柔和事务。",
    "天心星属金，为医星。主医疗、慈善、智慧。利于医疗、求学、行善。百事皆吉。",
    "天禽星属土，为巧星。主技巧、中正、和合。利于技艺、调解、中介。百事皆吉。",
];

const SPIRIT_MEANINGS: [&str; 8] = [
    "值符为天乙贵人，主吉祥、贵人、权威。百事皆吉，遇之大利。",
    "腾蛇主虚惊、怪异、虚假。主虚惊、梦幻、不实之事。",
    "太阴主阴私、暗昧、女性。利于阴谋、暗中行事、女性之事。",
    "六合主和合、婚姻、中介。利于婚姻、合作、交易。百事皆吉。",
    "白虎主凶恶、血光、官非。主凶险、争斗、伤害。不利百事。",
    "玄武主盗贼、暗昧、失物。主盗贼、遗失、阴谋。不利正事。",
    "九地主柔顺、隐藏、坚守。利于防守、隐藏、坚守。不利进攻。",
    "九天主刚健、高远、进取。利于进攻、高升、远行。百事皆吉。",
];

impl Gate {
    /// What this gate signifies.
    pub fn meaning(self) -> &'static str {
        GATE_MEANINGS[self.index()]
    }
}

impl Star {
    /// What this star signifies.
    pub fn meaning(self) -> &'static str {
        STAR_MEANINGS[self.index()]
    }
}

impl Spirit {
    /// What this spirit signifies.
    pub fn meaning(self) -> &'static str {
        SPIRIT_MEANINGS[self.index()]
    }
}

/// The family a glossary entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SymbolKind {
    /// 八门.
    Gate,
    /// 九星.
    Star,
    /// 八神.
    Spirit,
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gate => write!(f, "八门"),
            Self::Star => write!(f, "九星"),
            Self::Spirit => write!(f, "八神"),
        }
    }
}

/// A glossary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symbol {
    /// Family of the symbol.
    pub kind: SymbolKind,
    /// Its label.
    pub name: &'static str,
    /// Its meaning.
    pub meaning: &'static str,
}

/// Every glossary entry: gates, then stars, then spirits.
pub fn glossary() -> impl Iterator<Item = Symbol> {
    let gates = Gate::all().map(|g| Symbol {
        kind: SymbolKind::Gate,
        name: g.name(),
        meaning: g.meaning(),
    });
    let stars = Star::all().map(|s| Symbol {
        kind: SymbolKind::Star,
        name: s.name(),
        meaning: s.meaning(),
    });
    let spirits = Spirit::all().map(|s| Symbol {
        kind: SymbolKind::Spirit,
        name: s.name(),
        meaning: s.meaning(),
    });
    gates.chain(stars).chain(spirits)
}

/// Look up a gate, star or spirit by label. Stars also resolve without
/// their 天 prefix (`蓬` finds `天蓬`).
pub fn lookup(name: &str) -> OracleResult<Symbol> {
    let trimmed = name.trim();
    glossary()
        .find(|s| s.name == trimmed || (s.kind == SymbolKind::Star && s.name[3..] == *trimmed))
        .ok_or_else(|| OracleError::UnknownSymbol(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glossary_covers_every_symbol() {
        assert_eq!(glossary().count(), 25);
        assert!(glossary().all(|s| s.meaning.starts_with(&s.name[..3])));
    }

    #[test]
    fn lookup_by_name() {
        let symbol = lookup("开门").unwrap();
        assert_eq!(symbol.kind, SymbolKind::Gate);
        assert!(symbol.meaning.contains("百事皆吉"));

        assert_eq!(lookup(" 值符 ").unwrap().kind, SymbolKind::Spirit);
        assert_eq!(lookup("蓬").unwrap().name, "天蓬");
    }

    #[test]
    fn gates_with_shared_reading_stay_distinct() {
        assert_ne!(lookup("景门").unwrap().meaning, lookup("惊门").unwrap().meaning);
    }

    #[test]
    fn unknown_symbol_is_an_error() {
        let err = lookup("天马").unwrap_err();
        assert_eq!(err.to_string(), "unknown symbol: 天马");
    }
}
