use anyhow::{bail, Result};
use chrono::Utc;
use colored::Colorize;
use log::info;
use std::collections::HashMap;

use crate::config::roster::default_roster;
use crate::config::settings::AppConfig;
use crate::database::{self, persons, winners, DbPool};
use crate::roulette::{calculate_weights, selector::probabilities, SpinError};

/// Operator commands run straight against the database.
pub struct ConsoleService {
    pool: DbPool,
}

/// One row of the odds table.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsLine {
    pub name: String,
    pub win_count: u32,
    pub weight: f64,
    pub probability: f64,
}

impl ConsoleService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let pool = database::create_pool(&config.server.database_path)?;
        Ok(Self::with_pool(pool))
    }

    pub fn with_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn seed(&self) -> Result<()> {
        let conn = database::get_connection(&self.pool)?;
        database::setup::initialize_schema(&conn)?;
        let created = database::seed::seed_if_empty(&conn, &default_roster(), Utc::now())?;
        println!("{} {} persons created", "Seeded:".green().bold(), created);
        Ok(())
    }

    pub fn spin(&self) -> Result<()> {
        let mut conn = database::get_connection(&self.pool)?;
        let mut rng = rand::thread_rng();

        let recorded = match database::spin_in_transaction(&mut conn, Utc::now(), &mut rng) {
            Ok(recorded) => recorded,
            Err(SpinError::NoEligibleCandidates) => bail!("Nobody is present, nothing to draw"),
            Err(e) => return Err(anyhow::Error::new(e).context("Spin failed")),
        };

        println!(
            "{} {} ({:.1}% chance among {} present, win #{} this period)",
            "Winner:".green().bold(),
            recorded.winner.name.bold(),
            recorded.outcome.probability * 100.0,
            recorded.outcome.total_participants,
            recorded.winner.win_count
        );
        Ok(())
    }

    pub fn odds_table(&self) -> Result<Vec<OddsLine>> {
        let conn = database::get_connection(&self.pool)?;
        let present = persons::list_present(&conn)?;
        let candidates: Vec<_> = present.iter().map(|p| p.candidate()).collect();

        let weights = calculate_weights(&candidates, Utc::now());
        let chances = probabilities(&weights);

        let mut lines: Vec<OddsLine> = present
            .into_iter()
            .zip(weights.into_iter().zip(chances))
            .map(|(person, (weight, probability))| OddsLine {
                name: person.name,
                win_count: person.win_count,
                weight,
                probability,
            })
            .collect();
        lines.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        Ok(lines)
    }

    pub fn odds(&self) -> Result<()> {
        let lines = self.odds_table()?;
        if lines.is_empty() {
            println!("{}", "Nobody is present.".yellow());
            return Ok(());
        }

        println!("{:<32} {:>5} {:>8} {:>8}", "Name".bold(), "Wins", "Weight", "Chance");
        for line in &lines {
            println!(
                "{:<32} {:>5} {:>8.4} {:>7.2}%",
                line.name, line.win_count, line.weight, line.probability * 100.0
            );
        }
        Ok(())
    }

    pub fn history(&self, limit: usize) -> Result<()> {
        let conn = database::get_connection(&self.pool)?;
        let rows = winners::list_recent(&conn, limit)?;
        info!("Loaded {} history entries", rows.len());

        let mut tally: HashMap<i64, usize> = HashMap::new();
        for row in &rows {
            *tally.entry(row.person.id).or_insert(0) += 1;
            println!(
                "{}  {}",
                row.winner.won_at.format("%Y-%m-%d %H:%M").to_string().dimmed(),
                row.person.name
            );
        }
        if !rows.is_empty() {
            println!("{} wins across {} persons", rows.len(), tally.len());
        }
        Ok(())
    }
}
