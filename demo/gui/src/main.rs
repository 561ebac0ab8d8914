//! Greeks TUI Entry Point

use anyhow::Result;
use demo_gui::prelude::*;

fn main() -> Result<()> {
    // Note: Tracing is disabled for TUI to avoid terminal interference

    let mut app = TuiApp::new()?;
    app.run()?;

    Ok(())
}
