// ==========================================
// 家庭住房分配系统 - 命令行入口
// ==========================================
// 用法:
//   building-packing [--config <file>] [families] [buildings] [output]
// 位置参数覆写配置文件中的对应路径
// ==========================================

use anyhow::{bail, Context, Result};
use building_packing::{logging, ConfigManager, PackingApi, PackingConfig};
use std::path::PathBuf;

const USAGE: &str = "用法: building-packing [--config <file>] [families] [buildings] [output]";

/// 命令行参数
#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    config: Option<PathBuf>,
    families: Option<PathBuf>,
    buildings: Option<PathBuf>,
    output: Option<PathBuf>,
    help: bool,
}

impl CliArgs {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut cli = CliArgs::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => cli.help = true,
                "-c" | "--config" => {
                    let path = args.next().context("--config 缺少文件路径")?;
                    cli.config = Some(PathBuf::from(path));
                }
                flag if flag.starts_with('-') => bail!("未知参数: {}\n{}", flag, USAGE),
                _ => positional.push(PathBuf::from(arg)),
            }
        }

        if positional.len() > 3 {
            bail!("位置参数过多\n{}", USAGE);
        }
        let mut positional = positional.into_iter();
        cli.families = positional.next();
        cli.buildings = positional.next();
        cli.output = positional.next();
        Ok(cli)
    }

    /// 位置参数覆写配置
    fn apply(self, mut config: PackingConfig) -> PackingConfig {
        if let Some(path) = self.families {
            config.families_path = path;
        }
        if let Some(path) = self.buildings {
            config.buildings_path = path;
        }
        if let Some(path) = self.output {
            config.output_path = path;
        }
        config
    }
}

fn main() -> Result<()> {
    let mut cli = CliArgs::parse(std::env::args().skip(1))?;
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    logging::init();
    tracing::info!("{} v{}", building_packing::APP_NAME, building_packing::VERSION);

    let config = ConfigManager::load(cli.config.take().as_deref())
        .context("无法加载配置")?
        .into_config();
    let config = cli.apply(config);

    let summary = PackingApi::new(config).run().context("分配失败")?;

    println!(
        "已分配 {} 户 / {} 人，未匹配 {} 户 / {} 人，报表: {}",
        summary.assigned_families,
        summary.assigned_people,
        summary.unmatched_families,
        summary.unmatched_people,
        summary.output_path.display()
    );
    Ok(())
}
