//! Starts a new day: the last logged reading becomes the baseline and the
//! trip log is emptied.

use super::open_store;
use crate::{
    libs::{
        config::Config,
        interaction::{Interaction, PresetInteraction, TerminalInteraction},
        messages::Message,
    },
    msg_info, msg_success,
    store::csv_store::{CsvStore, Rollover},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

/// Executes the clear command, prompting first unless `--yes` is given.
pub fn cmd(args: ClearArgs) -> Result<()> {
    let store = open_store(&Config::read()?);

    if args.yes {
        let preset = PresetInteraction {
            confirm: true,
            ..Default::default()
        };
        run(&store, &preset)?;
    } else {
        run(&store, &TerminalInteraction)?;
    }
    Ok(())
}

pub fn run(store: &CsvStore, interaction: &dyn Interaction) -> Result<Option<Rollover>> {
    if !interaction.confirm(Message::ConfirmClearTripLog)? {
        msg_info!(Message::OperationCancelled);
        return Ok(None);
    }

    let Some(rollover) = store.rollover()? else {
        msg_info!(Message::NothingToClear);
        return Ok(None);
    };

    msg_success!(Message::InitRecordCarriedOver {
        economy: rollover.carried.display_economy,
        distance: rollover.carried.display_distance,
    });
    msg_success!(Message::TripLogCleared(rollover.cleared));
    Ok(Some(rollover))
}
