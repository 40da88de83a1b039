use color_eyre::Result;
use movie_browse_config::CredentialStore;
use movie_browse_core::WatchedStore;

use super::AppContext;
use crate::output::Output;

pub fn run_clear(all: bool, watched: bool, credentials: bool, output: &Output) -> Result<()> {
    let ctx = AppContext::load()?;

    let clear_watched = all || watched;
    let clear_credentials = all || credentials;

    if !clear_watched && !clear_credentials {
        output.warn("No clear option specified. Use --watched, --credentials, or --all");
        output.println("\nExample: flickpick clear --watched");
        return Ok(());
    }

    if clear_watched {
        let store = WatchedStore::new(ctx.paths.watched_file());
        if store.clear()? {
            output.success("Cleared the watched list");
        } else {
            output.println("No watched list found to clear");
        }
    }

    if clear_credentials {
        let mut store = CredentialStore::new(ctx.paths.credentials_file());
        store.clear()?;
        output.success("Cleared stored credentials");
    }

    Ok(())
}
