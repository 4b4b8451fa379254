use clap::{Parser, Subcommand};
use linked_label_common::Role;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linked-label")]
#[command(about = "RDF/SPARQL表示用 URIラベル解決ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 文字列のラベルを解決して表示
    Resolve {
        /// 解決する文字列（URI・リテラル）
        #[arg(required = true)]
        texts: Vec<String>,

        /// 構造上の役割 (object/predicate/resource-name/provenance/tabular-cell)
        #[arg(long, default_value = "object")]
        role: Role,

        /// ベースURL（複数指定可、設定より優先）
        #[arg(short, long = "base-url")]
        base_urls: Vec<String>,

        /// /get_config を提供するサーバのURL
        #[arg(long)]
        config_url: Option<String>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 候補ノードのJSONを一括解決
    Scan {
        /// 入力JSONファイル、またはJSONファイルを含むフォルダ
        #[arg(required = true)]
        input: PathBuf,

        /// 出力先（フォルダ入力では出力フォルダ。省略時は上書き）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ベースURL（複数指定可、設定より優先）
        #[arg(short, long = "base-url")]
        base_urls: Vec<String>,

        /// /get_config を提供するサーバのURL
        #[arg(long)]
        config_url: Option<String>,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// SPARQL結果（JSON）を読みやすいラベルで表示
    Table {
        /// SPARQL 1.1 Query Results JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// ベースURL（複数指定可、設定より優先）
        #[arg(short, long = "base-url")]
        base_urls: Vec<String>,

        /// /get_config を提供するサーバのURL
        #[arg(long)]
        config_url: Option<String>,

        /// 重複行をまとめない
        #[arg(long)]
        keep_duplicates: bool,

        /// HTMLの表として出力（セルはエスケープ）
        #[arg(long)]
        html: bool,
    },

    /// 設定を表示/編集
    Config {
        /// ベースURLを追加
        #[arg(long)]
        add_base_url: Option<String>,

        /// ベースURLを削除
        #[arg(long)]
        remove_base_url: Option<String>,

        /// /get_config を提供するサーバのURLを設定
        #[arg(long)]
        set_config_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
