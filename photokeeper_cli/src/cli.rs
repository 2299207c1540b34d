use std::path::PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: TopLevelCommands,
}

#[derive(Subcommand, Debug)]
pub enum TopLevelCommands {
    /// 打开一个文档库并进入交互模式
    Open {
        /// Directory holding the document bundles (defaults to ./PhotoKeeper)
        #[arg(value_name = "LIBRARY_ROOT")]
        path: Option<PathBuf>,

        /// JSON configuration file
        #[arg(short = 'c', long = "config", value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

// --- REPL (交互式) 命令定义 ---
#[derive(Parser, Debug)]
#[command(no_binary_name = true, about = "REPL commands")]
pub enum ReplCommand {
    /// 列出文档库中的文档 (最新的在前)
    #[command(visible_alias = "ls")]
    List {
        /// 显示每个文档的详细信息
        #[arg(short = 'd', long = "detail")]
        detail: bool,
    },
    /// 新建一个文档
    Add {
        /// 作为照片的本地图片文件
        #[arg(short = 'i', long = "image")]
        image: Option<PathBuf>,

        /// 文档名称 (默认为 "Photo")
        #[arg(short = 't', long = "title")]
        title: Option<String>,
    },
    /// 显示一个文档的详细信息
    Show {
        /// 文档名称
        name: String,
    },
    /// 在浏览模式与编辑模式之间切换
    Edit,
    /// 从列表中移除一个文档 (仅编辑模式)
    #[command(visible_alias = "rm")]
    Delete {
        /// 文档名称
        name: String,
    },
    /// 重命名一个文档
    Rename {
        /// 文档名称
        name: String,
        /// 新名称
        new_name: String,
    },
    /// 替换文档的照片和/或名称
    Update {
        /// 文档名称
        name: String,

        /// 新的本地图片文件
        #[arg(short = 'i', long = "image")]
        image: Option<PathBuf>,

        /// 新名称
        #[arg(short = 't', long = "title")]
        title: Option<String>,
    },
    /// 设置文档的标题与备注
    Note {
        /// 文档名称
        name: String,

        #[arg(short = 't', long = "title")]
        title: String,

        #[arg(short = 'n', long = "note")]
        note: String,
    },
    /// 重新扫描文档库目录
    Refresh,
    /// 退出交互式会话
    Exit,
}
