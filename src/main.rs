use tasktracker::{
    DataPaths, OptionRegistry, SessionFile, SessionGuard, TaskTable, new_session_token, statics,
};

/// How the application was allowed to start. Edit mode holds the claimed
/// session token until exit.
enum Launch {
    Edit(SessionGuard),
    ViewOnly,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let paths = DataPaths::resolve();

    let table = match TaskTable::load_path(&paths.task_data()) {
        Ok(table) => table,
        Err(e) => {
            log::error!("failed to load task data: {e:#}");
            std::process::exit(1);
        }
    };
    let registry = match OptionRegistry::load_path(&paths.type_data()) {
        Ok(registry) => registry,
        Err(e) => {
            log::error!("failed to load column options: {e:#}");
            std::process::exit(1);
        }
    };

    let launch = match negotiate_session(&SessionFile::new(paths.active_session())) {
        Ok(Some(launch)) => launch,
        Ok(None) => {
            // User chose to quit at the active-session warning.
            log::info!("declined to open alongside an active editing session");
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("failed to check the session file: {e:#}");
            std::process::exit(1);
        }
    };
    let edit_allowed = matches!(launch, Launch::Edit(_));

    let result = tasktracker::run_gui(paths, table, registry, edit_allowed);

    // Keep the session guard alive until the GUI returns so the token is
    // released on the way out.
    drop(launch);

    if let Err(e) = result {
        log::error!("GUI error: {e}");
        std::process::exit(1);
    }
}

/// Startup contract from the shared session file: claim the session and open
/// in edit mode when it is free; otherwise offer view-only, reset, or quit.
/// The check is optimistic — concurrent writers can still race, which is an
/// accepted limitation of this scheme.
fn negotiate_session(file: &SessionFile) -> anyhow::Result<Option<Launch>> {
    let owner = file.active_owner()?;
    let Some(owner) = owner else {
        let guard = SessionGuard::claim(file.clone(), new_session_token())?;
        return Ok(Some(Launch::Edit(guard)));
    };

    let host = owner.split_whitespace().next().unwrap_or(&owner);
    let choice = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(statics::EN_SESSION_ACTIVE_TITLE)
        .set_description(format!("{host} {}", statics::EN_SESSION_ACTIVE_BODY))
        .set_buttons(rfd::MessageButtons::YesNoCancel)
        .show();

    match choice {
        rfd::MessageDialogResult::Yes => Ok(Some(Launch::ViewOnly)),
        rfd::MessageDialogResult::No => {
            let reset = matches!(
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Warning)
                    .set_title(statics::EN_SESSION_RESET_TITLE)
                    .set_description(statics::EN_SESSION_RESET_BODY)
                    .set_buttons(rfd::MessageButtons::YesNo)
                    .show(),
                rfd::MessageDialogResult::Yes
            );
            if !reset {
                return Ok(None);
            }
            file.clear()?;
            let guard = SessionGuard::claim(file.clone(), new_session_token())?;
            Ok(Some(Launch::Edit(guard)))
        }
        _ => Ok(None),
    }
}
