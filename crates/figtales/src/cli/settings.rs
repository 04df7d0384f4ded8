//! Settings command handlers.

use super::commands::SettingsCommands;
use super::context::AppContext;
use figtales::{ConfigError, ConfigErrorKind, FigtalesResult, Notification, Notifier, SettingsUpdate};

/// Handle settings commands.
pub fn handle_settings_command(ctx: &mut AppContext, cmd: SettingsCommands) -> FigtalesResult<()> {
    match cmd {
        SettingsCommands::Show => {
            let settings = ctx.session.settings();
            println!("storyCount:    {}", settings.story_count());
            println!("criteriaCount: {}", settings.criteria_count());
            println!("userType:      {}", settings.user_type());
            println!(
                "audienceType:  {}",
                settings.audience_type().as_deref().unwrap_or("(none)")
            );
            Ok(())
        }

        SettingsCommands::Set {
            story_count,
            criteria_count,
            user_type,
            audience_type,
            clear_audience,
        } => {
            let mut update = SettingsUpdate::new();
            if let Some(count) = story_count {
                update = update.story_count(count);
            }
            if let Some(count) = criteria_count {
                update = update.criteria_count(count);
            }
            if let Some(user_type) = user_type {
                update = update.user_type(user_type);
            }
            if clear_audience {
                update = update.audience_type(None);
            } else if audience_type.is_some() {
                update = update.audience_type(audience_type);
            }
            if update.is_empty() {
                return Err(ConfigError::new(ConfigErrorKind::EmptyUpdate).into());
            }

            let report = ctx.session.update_settings(update);
            for field in report.applied() {
                ctx.notifier
                    .notify(Notification::success(format!("Updated {field}")));
            }
            match report.rejected().first() {
                Some(rejection) => {
                    for rejection in report.rejected() {
                        ctx.notifier.notify(
                            Notification::warning(format!("Ignored {}", rejection.field))
                                .with_description(format!(
                                    "'{}' is out of range; keeping the previous value",
                                    rejection.value
                                )),
                        );
                    }
                    Err(ConfigError::new(ConfigErrorKind::InvalidSetting {
                        field: rejection.field.to_string(),
                        value: rejection.value.clone(),
                    })
                    .into())
                }
                None => Ok(()),
            }
        }
    }
}
