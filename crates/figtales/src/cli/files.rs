//! Design file command handlers.

use super::context::AppContext;
use super::commands::FileCommands;
use figtales::{
    FigtalesResult, IngestError, IngestErrorKind, Notification, Notifier, files_added_message,
    ingest_bytes, ingest_paths,
};
use tokio::io::AsyncReadExt;

/// Handle design file commands.
pub async fn handle_file_command(ctx: &mut AppContext, cmd: FileCommands) -> FigtalesResult<()> {
    match cmd {
        FileCommands::Add { paths } => {
            let mut report = ingest_paths(&paths, &ctx.config.upload).await;
            notify_rejections(ctx, report.rejected());
            if report.accepted().is_empty() {
                return match report.rejected().first() {
                    Some(e) => Err(e.clone().into()),
                    None => Ok(()),
                };
            }
            ctx.notifier.notify(Notification::success(report.summary()));
            ctx.session.add_files(report.take_accepted());
            Ok(())
        }

        FileCommands::Paste { name, mime_type } => {
            let mut bytes = Vec::new();
            let ingested = tokio::io::stdin()
                .read_to_end(&mut bytes)
                .await
                .map_err(|e| {
                    IngestError::new(IngestErrorKind::Unreadable {
                        name: name.clone(),
                        reason: e.to_string(),
                    })
                })
                .and_then(|_| ingest_bytes(&name, bytes, mime_type.as_deref(), &ctx.config.upload));
            let file = match ingested {
                Ok(file) => file,
                Err(e) => {
                    notify_rejections(ctx, std::slice::from_ref(&e));
                    return Err(e.into());
                }
            };
            ctx.session.add_files(vec![file]);
            ctx.notifier.notify(Notification::success(files_added_message(1)));
            Ok(())
        }

        FileCommands::Remove { id } => {
            let file = ctx.session.remove_file(id)?;
            ctx.notifier
                .notify(Notification::success(format!("Removed {}", file.name())));
            Ok(())
        }

        FileCommands::List => {
            if ctx.session.files().is_empty() {
                println!("No design files. Add some with `figtales files add`.");
                return Ok(());
            }
            println!("{:<36}  {:<14}  {:>10}  NAME", "ID", "TYPE", "BYTES");
            for file in ctx.session.files() {
                println!(
                    "{:<36}  {:<14}  {:>10}  {}",
                    file.id(),
                    file.mime_type(),
                    file.size(),
                    file.name()
                );
            }
            Ok(())
        }
    }
}

fn notify_rejections(ctx: &AppContext, rejected: &[IngestError]) {
    for e in rejected {
        ctx.notifier.notify(
            Notification::error("File rejected").with_description(e.kind.to_string()),
        );
    }
}
