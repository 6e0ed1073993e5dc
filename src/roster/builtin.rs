//! Built-in roster data.
//!
//! Default packs used when no external data file is present. Skill text is
//! kept in the raw concatenated 技能名：描述 form; segmentation happens at
//! display time.

use super::general::{Faction, General};
use super::pack::{Pack, Roster};

/// The default roster: 标准版 plus the 风/火/林 expansion packs.
pub fn builtin_roster() -> Roster {
    Roster::new(vec![standard_pack(), wind_pack(), fire_pack(), woods_pack()])
}

fn g(name: &str, faction: Faction, hp: u8, skills: &str) -> General {
    General::new(name, faction, hp, skills)
}

pub fn standard_pack() -> Pack {
    Pack::new(
        "std",
        "标准版",
        vec![
            g("曹操", Faction::Wei, 4, "奸雄：你可以立即获得对你造成伤害的牌。护驾：主公技，当你需要使用或打出一张【闪】时，你可以令其他魏势力角色选择是否替你打出。"),
            g("司马懿", Faction::Wei, 3, "反馈：你可以立即获得对你造成伤害的角色的一张牌。鬼才：在任意角色的判定牌生效前，你可以打出一张手牌代替之。"),
            g("夏侯惇", Faction::Wei, 4, "刚烈：当你受到伤害后，你可以进行判定，若结果不为红桃，伤害来源选择一项：弃置两张手牌，或受到你对其造成的1点伤害。"),
            g("张辽", Faction::Wei, 4, "突袭：摸牌阶段，你可以放弃摸牌，改为获得至多两名角色的各一张手牌。"),
            g("许褚", Faction::Wei, 4, "裸衣：摸牌阶段，你可以少摸一张牌，若如此做，本回合你使用【杀】或【决斗】对目标角色造成的伤害+1。"),
            g("郭嘉", Faction::Wei, 3, "天妒：当你的判定牌生效后，你可以获得此牌。遗计：当你受到1点伤害后，你可以摸两张牌，然后将其中一张交给一名角色。"),
            g("甄姬", Faction::Wei, 3, "倾国：你可以将一张黑色手牌当【闪】使用或打出。洛神：准备阶段，你可以进行判定，若结果为黑色，你获得此牌且可以重复此流程。"),
            g("刘备", Faction::Shu, 4, "仁德：出牌阶段，你可以将任意张手牌交给其他角色，若你于此阶段内给出的牌首次达到两张，你回复1点体力。激将：主公技，当你需要使用或打出一张【杀】时，你可以令其他蜀势力角色选择是否替你使用或打出。"),
            g("关羽", Faction::Shu, 4, "武圣：你可以将一张红色牌当【杀】使用或打出。"),
            g("张飞", Faction::Shu, 4, "咆哮：出牌阶段，你使用【杀】无次数限制。"),
            g("诸葛亮", Faction::Shu, 3, "观星：准备阶段，你可以观看牌堆顶的五张牌（存活角色少于四名时改为等量的牌），然后以任意顺序放回牌堆顶或牌堆底。空城：锁定技，若你没有手牌，你不能成为【杀】或【决斗】的目标。"),
            g("赵云", Faction::Shu, 4, "龙胆：你可以将一张【杀】当【闪】、一张【闪】当【杀】使用或打出。"),
            g("马超", Faction::Shu, 4, "马术：锁定技，你与其他角色的距离-1。铁骑：当你使用【杀】指定一个目标后，你可以进行判定，若结果为红色，其不能使用【闪】响应此【杀】。"),
            g("黄月英", Faction::Shu, 3, "集智：当你使用一张普通锦囊牌时，你可以摸一张牌。奇才：你使用锦囊牌无距离限制。"),
            g("孙权", Faction::Wu, 4, "制衡：出牌阶段限一次，你可以弃置任意张牌，然后摸等量的牌。救援：主公技，锁定技，当你处于濒死状态被其他吴势力角色使用【桃】救回时，你额外回复1点体力。"),
            g("甘宁", Faction::Wu, 4, "奇袭：你可以将一张黑色牌当【过河拆桥】使用。"),
            g("吕蒙", Faction::Wu, 4, "克己：若你未于出牌阶段内使用或打出过【杀】，你可以跳过弃牌阶段。"),
            g("黄盖", Faction::Wu, 4, "苦肉：出牌阶段，你可以失去1点体力，然后摸两张牌。"),
            g("周瑜", Faction::Wu, 3, "英姿：摸牌阶段，你可以多摸一张牌。反间：出牌阶段限一次，你可以令一名其他角色选择一种花色，然后获得你的一张手牌并展示之，若此牌与其所选花色不同，你对其造成1点伤害。"),
            g("大乔", Faction::Wu, 3, "国色：你可以将一张方块牌当【乐不思蜀】使用。流离：当你成为【杀】的目标时，你可以弃置一张牌，将此【杀】转移给你攻击范围内的另一名角色。"),
            g("陆逊", Faction::Wu, 3, "谦逊：锁定技，你不能成为【顺手牵羊】和【乐不思蜀】的目标。连营：当你失去最后的手牌后，你可以摸一张牌。"),
            g("孙尚香", Faction::Wu, 3, "结姻：出牌阶段限一次，你可以弃置两张手牌并选择一名已受伤的男性角色，你与其各回复1点体力。枭姬：当你失去装备区里的一张牌后，你可以摸两张牌。"),
            g("华佗", Faction::Qun, 3, "急救：你的回合外，你可以将一张红色牌当【桃】使用。青囊：出牌阶段限一次，你可以弃置一张手牌，令一名角色回复1点体力。"),
            g("吕布", Faction::Qun, 4, "无双：锁定技，你使用的【杀】需两张【闪】才能抵消；与你进行【决斗】的角色每次需打出两张【杀】。"),
            g("貂蝉", Faction::Qun, 3, "离间：出牌阶段限一次，你可以弃置一张牌并选择两名男性角色，令其中一名视为对另一名使用一张【决斗】。闭月：结束阶段，你可以摸一张牌。"),
        ],
    )
}

pub fn wind_pack() -> Pack {
    Pack::new(
        "wind",
        "风包",
        vec![
            g("夏侯渊", Faction::Wei, 4, "神速：你可以选择一项：1.跳过判定阶段和摸牌阶段；2.跳过出牌阶段并弃置一张装备牌。若如此做，你视为对一名其他角色使用一张【杀】。"),
            g("曹仁", Faction::Wei, 4, "据守：结束阶段，你可以摸一张牌，然后将你的武将牌翻面。"),
            g("黄忠", Faction::Shu, 4, "烈弓：当你于出牌阶段内使用【杀】指定一个目标后，若其手牌数不小于你的体力值或不大于你的攻击范围，你可以令其不能使用【闪】响应此【杀】。"),
            g("魏延", Faction::Shu, 4, "狂骨：锁定技，当你对距离1以内的一名角色造成1点伤害后，你回复1点体力或摸一张牌。"),
            g("小乔", Faction::Wu, 3, "天香：当你受到伤害时，你可以弃置一张红桃手牌，将此伤害转移给一名其他角色，然后其摸X张牌（X为其已损失的体力值）。红颜：锁定技，你的黑桃牌视为红桃牌。"),
            g("周泰", Faction::Wu, 4, "不屈：锁定技，当你处于濒死状态时，你将牌堆顶的一张牌置于你的武将牌上，若此牌的点数与你武将牌上已有的牌均不同，你的体力至少视为1点。"),
            g("张角", Faction::Qun, 3, "雷击：当你使用或打出【闪】时，你可以令一名其他角色进行判定，若结果为黑桃，你对其造成2点雷电伤害。鬼道：当一名角色的判定牌生效前，你可以打出一张黑色牌代替之。黄天：主公技，其他群势力角色的出牌阶段限一次，其可以将一张【闪】或【闪电】交给你。"),
            g("于吉", Faction::Qun, 3, "蛊惑：出牌阶段限一次，你可以扣置一张手牌当任意一张基本牌或普通锦囊牌使用，其他角色可以质疑并翻开此牌，若为假则此牌作废。"),
        ],
    )
}

pub fn fire_pack() -> Pack {
    Pack::new(
        "fire",
        "火包",
        vec![
            g("典韦", Faction::Wei, 4, "强袭：出牌阶段限一次，你可以失去1点体力或弃置一张武器牌，然后对你攻击范围内的一名其他角色造成1点伤害。"),
            g("荀彧", Faction::Wei, 3, "驱虎：出牌阶段限一次，你可以与一名体力值大于你的角色拼点，若你赢，你令其对其攻击范围内你选择的另一名角色造成1点伤害；若你没赢，其对你造成1点伤害。节命：当你受到1点伤害后，你可以令一名角色将手牌摸至X张（X为其体力上限且至多为5）。"),
            g("庞统", Faction::Shu, 3, "连环：你可以将一张梅花手牌当【铁索连环】使用或重铸。涅槃：限定技，当你处于濒死状态时，你可以弃置你区域里的所有牌，然后复原你的武将牌，摸三张牌并将体力回复至3点。"),
            g("卧龙诸葛亮", Faction::Shu, 3, "八阵：锁定技，若你的装备区里没有防具牌，你视为装备着【八卦阵】。火计：你可以将一张红色手牌当【火攻】使用。看破：你可以将一张黑色手牌当【无懈可击】使用。"),
            g("太史慈", Faction::Wu, 4, "天义：出牌阶段限一次，你可以与一名角色拼点，若你赢，本回合你可以多使用一张【杀】、使用【杀】无距离限制且可以多选择一个目标；若你没赢，本回合你不能使用【杀】。"),
            g("庞德", Faction::Qun, 4, "马术：锁定技，你与其他角色的距离-1。猛进：当你使用的【杀】被【闪】抵消时，你可以弃置其一张牌。"),
            g("袁绍", Faction::Qun, 4, "乱击：你可以将两张同花色的手牌当【万箭齐发】使用。血裔：主公技，锁定技，你的手牌上限+X（X为场上群势力角色的数量）。"),
            g("颜良文丑", Faction::Qun, 4, "双雄：摸牌阶段，你可以改为进行判定，获得此牌，然后本回合你可以将与此牌颜色不同的手牌当【决斗】使用。"),
        ],
    )
}

pub fn woods_pack() -> Pack {
    Pack::new(
        "woods",
        "林包",
        vec![
            g("曹丕", Faction::Wei, 3, "行殇：你可以获得阵亡角色的所有牌。放逐：当你受到伤害后，你可以令一名其他角色翻面并摸X张牌（X为你已损失的体力值）。颂威：主公技，当其他魏势力角色的判定牌生效后为黑色时，其可以令你摸一张牌。"),
            g("徐晃", Faction::Wei, 4, "断粮：你可以将一张黑色基本牌或黑色装备牌当【兵粮寸断】使用；你使用【兵粮寸断】无距离限制。"),
            g("孟获", Faction::Shu, 4, "祸首：锁定技，【南蛮入侵】对你无效；当其他角色使用【南蛮入侵】指定目标后，你代替其成为此牌造成的伤害的来源。再起：摸牌阶段，若你已受伤，你可以改为亮出牌堆顶的X张牌（X为你已损失的体力值），获得其中的红桃牌，然后回复等同于红桃牌数量的体力。"),
            g("祝融", Faction::Shu, 4, "巨象：锁定技，【南蛮入侵】对你无效；当其他角色使用的【南蛮入侵】结算结束后，你获得之。烈刃：当你使用【杀】对目标角色造成伤害后，你可以与其拼点，若你赢，你获得其一张牌。"),
            g("鲁肃", Faction::Wu, 3, "好施：摸牌阶段，你可以多摸两张牌，然后若你的手牌数大于五张，你将一半的手牌（向下取整）交给手牌最少的一名其他角色。缔盟：出牌阶段限一次，你可以选择两名手牌数不同的其他角色并弃置一张牌，令二者交换手牌。"),
            g("孙坚", Faction::Wu, 4, "英魂：准备阶段，若你已受伤，你可以选择一项：令一名其他角色摸X张牌然后弃置一张牌，或令其摸一张牌然后弃置X张牌（X为你已损失的体力值）。"),
            g("董卓", Faction::Qun, 8, "酒池：你可以将一张黑桃手牌当【酒】使用。肉林：锁定技，你使用【杀】指定女性角色为目标后，或女性角色使用【杀】指定你为目标后，目标角色需使用两张【闪】才能抵消。崩坏：锁定技，结束阶段，若你不是体力值最小的角色，你失去1点体力或减1点体力上限。暴虐：主公技，当其他群势力角色造成1点伤害后，其可以进行判定，若结果为黑桃，你回复1点体力。"),
            g("贾诩", Faction::Qun, 3, "完杀：锁定技，你的回合内，只有你和处于濒死状态的角色才能使用【桃】。乱武：限定技，出牌阶段，你可以令所有其他角色各选择一项：对其距离最近的另一名角色使用一张【杀】，或失去1点体力。帷幕：锁定技，你不能成为黑色锦囊牌的目标。"),
        ],
    )
}
