use anyhow::Result;
use sqlx::PgPool;

use cardweaver_database::{SqlxCrud, SqlxSchema};

use crate::card::{Animations, Card, Layout, Palette, Spacing};
use crate::payload::CreateCard;

/// The two example cards inserted into a fresh store, one per showcase
/// element theme.
pub fn seed_cards() -> Vec<CreateCard> {
    vec![
        CreateCard {
            title: "Inferno Dragon".to_string(),
            description: "A legendary beast born from the heart of a dying star. Its flames can melt adamantium.".to_string(),
            category: "LEGENDARY".to_string(),
            app_type: "MONSTER".to_string(),
            tags: vec!["fire".to_string(), "dragon".to_string(), "boss".to_string()],
            element: "fire".to_string(),
            palette: Palette {
                color1: "#dd8448".to_string(),
                color2: "#ff9d66".to_string(),
                color3: "#ff6b35".to_string(),
                glow: "rgba(221, 132, 72, 0.5)".to_string(),
            },
            animations: Animations {
                border_rotation: true,
                glow_pulse: true,
                chromatic: false,
                particles: true,
                duration: None,
            },
            width: 380,
            height: 480,
            border_radius: 20,
            font_family: "Rajdhani".to_string(),
            spacing: Spacing::default(),
            layout: Layout::default(),
        },
        CreateCard {
            title: "Abyssal Leviathan".to_string(),
            description: "Lurking in the deepest trenches, this ancient entity controls the tides.".to_string(),
            category: "MYTHIC".to_string(),
            app_type: "SEA CREATURE".to_string(),
            tags: vec!["water".to_string(), "abyss".to_string(), "ancient".to_string()],
            element: "water".to_string(),
            palette: Palette {
                color1: "#00f0ff".to_string(),
                color2: "#00aaff".to_string(),
                color3: "#0055ff".to_string(),
                glow: "rgba(0, 240, 255, 0.5)".to_string(),
            },
            animations: Animations {
                border_rotation: true,
                glow_pulse: true,
                chromatic: true,
                particles: true,
                duration: None,
            },
            width: 380,
            height: 480,
            border_radius: 20,
            font_family: "Rajdhani".to_string(),
            spacing: Spacing::default(),
            layout: Layout::default(),
        },
    ]
}

/// Inserts the example cards when the table is empty. Returns whether
/// anything was inserted.
///
/// The emptiness check and the inserts run in one transaction holding a
/// table lock, so a concurrent create between check and insert cannot make
/// the check stale.
pub async fn seed_cards_if_empty(pool: &PgPool) -> Result<bool> {
    let mut tx = pool.begin().await?;

    let lock_sql = format!("LOCK TABLE \"{}\" IN SHARE ROW EXCLUSIVE MODE", Card::TABLE_NAME);
    sqlx::query(&lock_sql).execute(&mut *tx).await?;

    let existing = Card::count(&mut *tx).await?;
    if existing > 0 {
        tx.rollback().await?;
        return Ok(false);
    }

    tracing::info!("Seeding database...");
    for payload in seed_cards() {
        payload.into_card().create(&mut *tx).await?;
    }
    tx.commit().await?;

    Ok(true)
}
