//! 武将抽取器 - command-line entry point
//!
//! Thin driver over the library: pick packs, ban generals, draw, and print
//! the grouped results with segmented skill text.

use std::env;

use anyhow::{anyhow, bail, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wujiang::{draw_for_mode, segment, BanList, DrawError, DrawGroup, GameMode, General, Roster};

const USAGE: &str = "\
武将抽取器

用法:
    wujiang [选项]

选项:
    --mode <normal|landlord>   抽取模式（默认 normal）
    --players <2-8>            普通模式玩家人数（默认 5）
    --packs <key,key,...>      启用的武将包（默认全部，见 --list-packs）
    --ban <名,名,...>          本次禁用的武将
    --seed <N>                 随机种子（默认取系统熵）
    --json                     以 JSON 输出抽取结果
    --list-packs               列出所有武将包
    --detail <名>              查看单个武将的技能详情
    --help                     显示本帮助
";

struct Options {
    mode: GameMode,
    packs: Vec<String>,
    bans: Vec<String>,
    seed: Option<u64>,
    json: bool,
    list_packs: bool,
    detail: Option<String>,
    help: bool,
}

impl Options {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Self> {
        let mut mode_name = "normal".to_string();
        let mut players: u8 = 5;
        let mut packs = Vec::new();
        let mut bans = Vec::new();
        let mut seed = None;
        let mut json = false;
        let mut list_packs = false;
        let mut detail = None;
        let mut help = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--mode" => mode_name = value(&mut args, "--mode")?,
                "--players" => {
                    players = value(&mut args, "--players")?
                        .parse()
                        .map_err(|_| anyhow!("--players 需要一个数字"))?
                }
                "--packs" => packs = split_list(&value(&mut args, "--packs")?),
                "--ban" => bans = split_list(&value(&mut args, "--ban")?),
                "--seed" => {
                    seed = Some(
                        value(&mut args, "--seed")?
                            .parse()
                            .map_err(|_| anyhow!("--seed 需要一个数字"))?,
                    )
                }
                "--json" => json = true,
                "--list-packs" => list_packs = true,
                "--detail" => detail = Some(value(&mut args, "--detail")?),
                "--help" | "-h" => help = true,
                other => bail!("未知选项：{}\n\n{}", other, USAGE),
            }
        }

        let mode = match mode_name.as_str() {
            "normal" => {
                if !(2..=8).contains(&players) {
                    bail!("普通模式人数需在 2-8 之间");
                }
                GameMode::Normal { players }
            }
            // 斗地主模式固定 3 人
            "landlord" => GameMode::Landlord,
            other => bail!("未知模式：{}（可选 normal / landlord）", other),
        };

        Ok(Self {
            mode,
            packs,
            bans,
            seed,
            json,
            list_packs,
            detail,
            help,
        })
    }
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| anyhow!("{} 需要一个参数", flag))
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split([',', '，'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = Options::parse(env::args().skip(1))?;
    if opts.help {
        print!("{}", USAGE);
        return Ok(());
    }

    let roster = Roster::load();

    if opts.list_packs {
        for pack in roster.packs() {
            println!("{:<8} {}（{}名）", pack.key, pack.name, pack.len());
        }
        return Ok(());
    }

    if let Some(name) = &opts.detail {
        return print_detail(&roster, name);
    }

    let mut bans = BanList::new();
    bans.confirm(opts.bans.iter().cloned());
    if !bans.is_empty() {
        log::info!("{} generals banned for this draw", bans.len());
    }

    let keys: Vec<&str> = if opts.packs.is_empty() {
        roster.packs().iter().map(|p| p.key.as_str()).collect()
    } else {
        opts.packs.iter().map(String::as_str).collect()
    };
    let pool = roster.available(&keys, &bans);
    if pool.is_empty() {
        bail!("可用武将数量不足！");
    }

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let groups = draw_for_mode(&pool, &opts.mode, &mut rng).map_err(|e| match e {
        DrawError::InsufficientPool {
            required,
            available,
        } => anyhow!(
            "可用武将数量不足！需要 {} 名，但只有 {} 名可用。",
            required,
            available
        ),
    })?;
    log::info!(
        "Drew {} generals from a pool of {}",
        opts.mode.required(),
        pool.len()
    );

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    println!("{}", opts.mode.description());
    for group in &groups {
        print_group(group);
    }
    Ok(())
}

fn print_group(group: &DrawGroup) {
    println!();
    println!("== {} ==", group.label);
    for general in &group.generals {
        print_card(general);
    }
}

fn print_card(general: &General) {
    println!(
        "{}　{}  体力{}  （{}）",
        general.name,
        general.faction.label(),
        general.hp,
        general.pack
    );
    print_skills(&general.skills, "    ");
}

fn print_detail(roster: &Roster, name: &str) -> Result<()> {
    let general = roster
        .find_general(name)
        .ok_or_else(|| anyhow!("未找到武将：{}", name))?;
    println!("{}", general.name);
    println!("势力：{}", general.faction.label());
    println!("体力: {} | {}", general.hp, general.pack);
    print_skills(&general.skills, "");
    Ok(())
}

fn print_skills(raw: &str, indent: &str) {
    for entry in segment(raw) {
        if entry.name.is_empty() {
            if !entry.description.is_empty() {
                println!("{}{}", indent, entry.description);
            }
        } else {
            println!("{}【{}】{}", indent, entry.name, entry.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options> {
        Options::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_to_five_player_normal_mode() {
        let opts = parse(&[]).unwrap();
        assert_eq!(opts.mode, GameMode::Normal { players: 5 });
        assert!(opts.packs.is_empty());
        assert!(!opts.json);
    }

    #[test]
    fn parses_landlord_mode_and_lists() {
        let opts = parse(&["--mode", "landlord", "--packs", "std,wind", "--ban", "曹操，吕布"]).unwrap();
        assert_eq!(opts.mode, GameMode::Landlord);
        assert_eq!(opts.packs, vec!["std", "wind"]);
        assert_eq!(opts.bans, vec!["曹操", "吕布"]);
    }

    #[test]
    fn rejects_out_of_range_player_counts() {
        assert!(parse(&["--players", "1"]).is_err());
        assert!(parse(&["--players", "9"]).is_err());
        assert!(parse(&["--players", "8"]).is_ok());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(parse(&["--frobnicate"]).is_err());
    }
}
