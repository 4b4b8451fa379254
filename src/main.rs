use clap::Parser;
use linked_label::{cli, config, error, fetch, render, scanner};
use linked_label_common::{
    merge_identical_bindings, resolve_pending, CandidateText, LabelResolver, SparqlResults,
};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Resolve { texts, role, base_urls, config_url, json } => {
            let (bases, source) =
                fetch::resolve_base_urls(&base_urls, config_url.as_deref(), &config).await;
            tracing::debug!(%source, count = bases.len(), "base urls");
            let resolver = LabelResolver::new(bases);

            let candidates: Vec<CandidateText> = texts
                .into_iter()
                .map(|raw| CandidateText::new(raw, role))
                .collect();

            if json {
                let resolutions: Vec<_> = resolver.resolve_all(&candidates).collect();
                println!("{}", serde_json::to_string_pretty(&resolutions)?);
            } else {
                for (candidate, resolution) in candidates.iter().zip(resolver.resolve_all(&candidates)) {
                    println!("{}", candidate.raw);
                    println!("  {}", render::describe(&resolution));
                }
            }
        }

        Commands::Scan { input, output, base_urls, config_url, recursive } => {
            println!("🔗 linked-label - 一括解決\n");

            // 1. 入力ファイルの列挙
            println!("[1/3] 入力をスキャン中...");
            let files = scanner::scan_inputs(&input, recursive)?;
            println!("✔ {}件のJSONファイルを検出\n", files.len());

            if files.is_empty() {
                return Err(error::LinkedLabelError::NoCandidates(input.display().to_string()));
            }

            // 2. ベースURLの取得（以降の解決はこの集合だけを使う）
            println!("[2/3] ベースURLを取得中...");
            let (bases, source) =
                fetch::resolve_base_urls(&base_urls, config_url.as_deref(), &config).await;
            println!("✔ ベースURL {}件 ({})\n", bases.len(), source);
            let resolver = LabelResolver::new(bases);

            // 3. 解決と保存
            println!("[3/3] ラベルを解決中...");
            for file in &files {
                let mut nodes = scanner::load_nodes(file)?;
                let resolved = resolve_pending(&mut nodes, &resolver);
                let target = scanner::output_path(&input, file, output.as_deref());
                scanner::save_nodes(&target, &nodes)?;
                println!(
                    "✔ {} ({}件中{}件を解決) -> {}",
                    file.display(),
                    nodes.len(),
                    resolved,
                    target.display()
                );
            }

            println!("\n✅ 解決完了");
        }

        Commands::Table { input, base_urls, config_url, keep_duplicates, html } => {
            if !input.exists() {
                return Err(error::LinkedLabelError::FileNotFound(input.display().to_string()));
            }
            let content = std::fs::read_to_string(&input)?;
            let mut results = SparqlResults::from_json(&content)?;
            if !keep_duplicates {
                let before = results.results.bindings.len();
                results = merge_identical_bindings(&results);
                tracing::debug!(before, after = results.results.bindings.len(), "merged identical bindings");
            }

            let (bases, _) =
                fetch::resolve_base_urls(&base_urls, config_url.as_deref(), &config).await;
            let resolver = LabelResolver::new(bases);

            let rows: Vec<Vec<String>> = results
                .rows()
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| match cell {
                            Some(candidate) => resolver
                                .resolve(candidate)
                                .label()
                                .map(|label| label.display_text().to_string())
                                .unwrap_or_else(|| candidate.raw.clone()),
                            None => String::new(),
                        })
                        .collect()
                })
                .collect();

            if html {
                println!("{}", render::render_html_table(&results.head.vars, &rows));
            } else {
                println!("{}", render::render_table(&results.head.vars, &rows));
                println!("\n{}行", rows.len());
            }
        }

        Commands::Config { add_base_url, remove_base_url, set_config_url, show } => {
            let mut config = config;
            let mut changed = false;

            if let Some(url) = add_base_url {
                if config.add_base_url(url.clone())? {
                    println!("✔ ベースURLを追加しました: {}", url);
                    changed = true;
                } else {
                    println!("既に登録されています: {}", url);
                }
            }

            if let Some(url) = remove_base_url {
                if config.remove_base_url(&url) {
                    println!("✔ ベースURLを削除しました: {}", url);
                    changed = true;
                } else {
                    println!("登録されていません: {}", url);
                }
            }

            if let Some(url) = set_config_url {
                config.set_config_url(url)?;
                println!("✔ 設定取得URLを設定しました");
                changed = true;
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  設定取得URL: {}", config.get_config_url().unwrap_or_else(|| "未設定".into()));
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  ベースURL: {}件", config.base_urls.len());
                for url in &config.base_urls {
                    println!("    - {}", url);
                }
            }
        }
    }

    Ok(())
}
