//! Missions listing command

use std::path::Path;

use anyhow::Result;

/// List the catalog without starting a session
pub fn missions_command(pack: Option<&Path>, show_answers: bool) -> Result<()> {
    let catalog = super::load_catalog(pack)?;

    println!("Misiones ({}):\n", catalog.len());

    for mission in catalog.missions() {
        println!("  #{} {} - {}", mission.id, mission.title, mission.badge);
        println!("    {}", mission.description);

        if show_answers {
            if let Some(answer) = mission.answer.canonical() {
                println!("    Respuesta: {}", answer);
            }
        }

        println!();
    }

    Ok(())
}
