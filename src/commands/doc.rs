use crate::cli::args::DocArgs;
use crate::docs;
use std::io::Write;
use tracing::info;

/// 生成文档并写到 stdout 或指定文件
pub fn run_doc(args: &DocArgs) -> anyhow::Result<()> {
    let doc = docs::render(&args.title, args.toc);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &doc)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
            info!(path = %path.display(), "documentation written");
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout.write_all(doc.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
