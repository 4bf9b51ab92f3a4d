//! CSV roster import and standings export.

use crate::models::{PlayerId, StandingsList, TournamentError};
use crate::storage::Storage;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Deserialize)]
struct RosterRow {
    name: String,
}

#[derive(Serialize)]
struct StandingRow<'a> {
    id: PlayerId,
    name: &'a str,
    wins: u32,
    matches: u32,
}

/// Register every player listed in a CSV with a `name` column, in file order.
///
/// The whole file is read and checked first; nothing is registered if any row is bad.
pub fn import_roster<S: Storage + ?Sized, R: Read>(
    store: &mut S,
    reader: R,
) -> Result<Vec<PlayerId>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut names = Vec::new();
    for (i, row) in rdr.deserialize::<RosterRow>().enumerate() {
        let row = row.map_err(|e| TournamentError::InvalidRoster(e.to_string()))?;
        if row.name.is_empty() {
            // Header is line 1.
            return Err(TournamentError::InvalidRoster(format!(
                "empty name on line {}",
                i + 2
            )));
        }
        names.push(row.name);
    }

    names.iter().map(|name| store.add_player(name)).collect()
}

/// Write standings as CSV with header `id,name,wins,matches`.
pub fn export_standings<W: Write>(standings: &StandingsList, writer: W) -> Result<(), TournamentError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    // Written by hand so an empty table still gets its header.
    wtr.write_record(["id", "name", "wins", "matches"])
        .map_err(|e| TournamentError::ExportFailed(e.to_string()))?;
    for s in standings {
        wtr.serialize(StandingRow {
            id: s.player.id,
            name: &s.player.name,
            wins: s.record.wins,
            matches: s.record.matches,
        })
        .map_err(|e| TournamentError::ExportFailed(e.to_string()))?;
    }
    wtr.flush()
        .map_err(|e| TournamentError::ExportFailed(e.to_string()))?;
    Ok(())
}
