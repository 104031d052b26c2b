//! Interpretation prompts.
//!
//! Wraps a chart transcript in the instruction text for its method. Sending
//! the prompt to a model is left to the caller.

use crate::chart::Chart;

const LIUYAO_HEAD: &str =
    "你是一位精通周易六爻占卜的大师。请根据以下卦象信息，为用户提供详细的解读。";
const LIUYAO_ASPECTS: &str = "请从以下几个方面进行解读：\n1. 卦象总体含义\n2. 当前形势分析\n3. 发展趋势预测";
const LIUYAO_CHANGED_ASPECT: &str = "\n4. 变卦的影响和建议";
const LIUYAO_TAIL: &str = "请用通俗易懂的语言解读，既要保持传统周易的智慧，又要贴近现代生活。解读应该积极正面，给予用户启发和指导。";

const QIMEN_HEAD: &str = "你是一位精通奇门遁甲的大师。请根据以下奇门遁甲盘进行详细解读：";
const QIMEN_ASPECTS: &str = "请从以下几个方面进行分析：\n1. 整体格局分析\n2. 值符值使的意义\n3. 九宫布局的吉凶\n4. 具体建议";

const LIUREN_HEAD: &str = "你是一位精通大六壬的大师。请根据以下大六壬课式进行详细解读：";
const LIUREN_ASPECTS: &str =
    "请从以下几个方面进行分析：\n1. 四课分析\n2. 三传解读\n3. 天将含义\n4. 吉凶判断\n5. 具体建议";

const ZIWEI_HEAD: &str = "你是一位精通紫微斗数的大师。请根据以下紫微斗数命盘进行详细解读：";
const ZIWEI_ASPECTS: &str =
    "请从以下几个方面进行分析：\n1. 命宫分析\n2. 主星解读\n3. 十二宫位详解\n4. 性格特点\n5. 运势建议";

/// Build the interpretation prompt for a chart, with an optional question
/// from the user appended.
pub fn build_prompt(chart: &Chart, question: Option<&str>) -> String {
    let text = chart.to_text();
    let text = text.trim_end();
    let mut prompt = match chart {
        Chart::LiuYao(c) => {
            let changed = if c.changed.is_some() {
                LIUYAO_CHANGED_ASPECT
            } else {
                ""
            };
            format!("{LIUYAO_HEAD}\n\n{text}\n\n{LIUYAO_ASPECTS}{changed}\n\n{LIUYAO_TAIL}")
        }
        Chart::QiMen(_) => format!("{QIMEN_HEAD}\n\n{text}\n\n{QIMEN_ASPECTS}"),
        Chart::DaLiuRen(_) => format!("{LIUREN_HEAD}\n\n{text}\n\n{LIUREN_ASPECTS}"),
        Chart::ZiWei(_) => format!("{ZIWEI_HEAD}\n\n{text}\n\n{ZIWEI_ASPECTS}"),
    };

    if let Some(question) = question.map(str::trim).filter(|q| !q.is_empty()) {
        prompt.push_str("\n\n用户问题：");
        prompt.push_str(question);
    }
    prompt
}
