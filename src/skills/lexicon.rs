//! Header classification vocabularies.
//!
//! The scan/accept algorithm lives in `segmenter`; everything here is data,
//! so the classification policy can be swapped without touching the
//! algorithm.

use std::collections::HashSet;

/// Known real skill names. Membership alone is enough to accept a header
/// candidate, wherever it sits in the text.
pub const SKILL_NAMES: &[&str] = &[
    "奸雄", "护驾", "反馈", "鬼才", "刚烈", "突袭", "裸衣", "天妒", "遗计", "倾国",
    "洛神", "仁德", "激将", "武圣", "咆哮", "观星", "空城", "龙胆", "马术", "铁骑",
    "集智", "奇才", "制衡", "救援", "奇袭", "克己", "苦肉", "英姿", "反间", "国色",
    "流离", "谦逊", "连营", "结姻", "枭姬", "急救", "青囊", "无双", "离间", "闭月",
    "神速", "据守", "烈弓", "狂骨", "天香", "红颜", "不屈", "雷击", "鬼道", "黄天",
    "蛊惑", "行殇", "放逐", "颂威", "祸首", "再起", "巨象", "烈刃", "好施", "缔盟",
    "英魂", "酒池", "肉林", "崩坏", "暴虐", "完杀", "乱武", "帷幕", "驱虎", "节命",
    "强袭", "八阵", "火计", "看破", "连环", "涅槃", "猛进", "乱击", "血裔", "双雄",
    "巧变", "屯田", "凿险", "急袭", "享乐", "放权", "若愚", "挑衅", "志继", "魂姿",
    "制霸", "直谏", "固政", "化身", "新生", "悲歌", "断肠", "落英", "酒诗", "镇军",
    "绝情", "伤逝", "恩怨", "眩惑", "无言", "举荐", "散谣", "制蛮", "旋风", "破军",
    "甘露", "补益", "明策", "智迟", "陷阵", "禁酒", "奇策", "智愚", "贞烈", "秘计",
    "将驰", "父魂", "当先", "伏枥", "潜袭", "安恤", "追忆", "疠火", "醇醪", "弓骑",
    "解烦", "恃勇", "自守", "宗室", "权计", "自立", "排异", "称象", "仁心", "峻刑",
    "御策", "绝策", "灭计", "焚城", "惴恐", "求援", "陷嗣", "龙吟", "巧说", "纵适",
    "夺刀", "暗箭", "胆守", "纵玄", "直言", "司敌", "慎断", "勇略", "定品", "法恩",
    "宴诛", "兴学", "诏缚", "强识", "献图", "忠勇", "谮毁", "骄矜", "慎行", "秉壹",
    "渐营", "矢北", "窃听", "献州", "燕语", "孝德", "恢拓", "明鉴", "兴衰", "讨袭",
    "活墨", "佐定", "振赡", "匡弼", "怃戎", "矢志", "穿心", "锋箭", "寝情", "贿生",
    "督粮", "腹鳞", "怀异", "急攻", "饰非",
];

/// Prose phrases that precede a colon without naming a skill: discourse
/// connectives and skill-category qualifiers.
pub const STOP_PHRASES: &[&str] = &[
    "可以", "然后", "令其", "当你", "锁定技", "限定技", "觉醒技", "主公技",
];

/// Characters that end a sentence, clause, or quotation. A candidate right
/// after one of these is taken as opening a new ability block.
pub const CLAUSE_TERMINATORS: &[char] = &['。', '；', '】', '」', '』', ')', '）'];

/// The allow/deny vocabularies consulted by the segmenter.
#[derive(Debug, Clone)]
pub struct Lexicon {
    skill_names: HashSet<String>,
    stop_phrases: HashSet<String>,
}

impl Lexicon {
    pub fn new<N, S>(skill_names: N, stop_phrases: S) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            skill_names: skill_names.into_iter().map(Into::into).collect(),
            stop_phrases: stop_phrases.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_skill_name(&self, text: &str) -> bool {
        self.skill_names.contains(text)
    }

    pub fn is_stop_phrase(&self, text: &str) -> bool {
        self.stop_phrases.contains(text)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(SKILL_NAMES.iter().copied(), STOP_PHRASES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lexicon_knows_the_curated_names() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_skill_name("奸雄"));
        assert!(lexicon.is_skill_name("饰非"));
        assert!(!lexicon.is_skill_name("不存在"));
    }

    #[test]
    fn default_lexicon_knows_the_stop_phrases() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_stop_phrase("锁定技"));
        assert!(lexicon.is_stop_phrase("当你"));
        assert!(!lexicon.is_stop_phrase("奸雄"));
    }

    #[test]
    fn custom_lexicon_replaces_the_tables() {
        let lexicon = Lexicon::new(["虎啸"], ["假如"]);
        assert!(lexicon.is_skill_name("虎啸"));
        assert!(!lexicon.is_skill_name("奸雄"));
        assert!(lexicon.is_stop_phrase("假如"));
    }
}
