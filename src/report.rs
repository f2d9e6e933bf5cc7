//! Runs the eight questions in order and assembles the text report.

use crate::catalog::SpeciesCatalog;
use crate::client::PokeApi;
use crate::config::ExplorerConfig;
use crate::errors::QueryResult;
use crate::queries::{
    count_fire_in_region, describe_evolution_chain, display_name, electric_without_evolutions,
    fastest_non_legendary, highest_attack_in_region, lightest_pokemon, most_common_grass_habitat,
    tall_water_pokemon,
};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

pub const REPORT_HEADER: &str = "POKÉMON EXPLORER - POKEAPI QUERY RESULTS";
const SEPARATOR_WIDTH: usize = 40;

/// The fixed questions, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Question {
    FireInRegion,
    TallWater,
    StarterEvolution,
    ElectricWithoutEvolution,
    HighestAttackInRegion,
    FastestNonLegendary,
    GrassHabitat,
    Lightest,
}

impl Question {
    pub const ALL: [Question; 8] = [
        Question::FireInRegion,
        Question::TallWater,
        Question::StarterEvolution,
        Question::ElectricWithoutEvolution,
        Question::HighestAttackInRegion,
        Question::FastestNonLegendary,
        Question::GrassHabitat,
        Question::Lightest,
    ];

    /// Question text as printed in the report, filled in from the run settings.
    pub fn prompt(&self, config: &ExplorerConfig) -> String {
        match self {
            Question::FireInRegion => format!(
                "1. How many Fire-type Pokémon are there in the {} region?",
                display_name(&config.fire_region)
            ),
            Question::TallWater => format!(
                "2. Which Water-type Pokémon are taller than {}?",
                config.min_water_height
            ),
            Question::StarterEvolution => format!(
                "3. Evolution chain of the starter {}",
                display_name(&config.starter)
            ),
            Question::ElectricWithoutEvolution => {
                "4. Which Electric-type Pokémon have no evolutions?".to_string()
            }
            Question::HighestAttackInRegion => format!(
                "5. Which Pokémon has the highest base Attack in the {} region?",
                display_name(&config.attack_region)
            ),
            Question::FastestNonLegendary => {
                "6. Which non-legendary Pokémon has the highest Speed?".to_string()
            }
            Question::GrassHabitat => {
                "7. What is the most common habitat among Grass-type Pokémon?".to_string()
            }
            Question::Lightest => {
                "8. Which Pokémon has the lowest recorded weight in the whole API?".to_string()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub question: Question,
    pub prompt: String,
    pub answer: String,
}

impl ReportEntry {
    /// Separator, question line, separator, answer.
    pub fn block(&self) -> String {
        let separator = "-".repeat(SEPARATOR_WIDTH);
        format!(
            "\n{separator}\n**QUESTION:** {}\n{separator}\n{}\n",
            self.prompt, self.answer
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn render(&self) -> String {
        let blocks: Vec<String> = self.entries.iter().map(ReportEntry::block).collect();
        format!("{}\n{}", REPORT_HEADER, blocks.join("\n"))
    }

    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.render())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Answer text for a routine, or its failure sentence.
fn answer_text<T: fmt::Display>(question: Question, result: QueryResult<T>) -> String {
    match result {
        Ok(answer) => answer.to_string(),
        Err(err) => {
            warn!(?question, error = %err, "question could not be answered");
            err.to_string()
        }
    }
}

fn answer(
    question: Question,
    api: &PokeApi,
    config: &ExplorerConfig,
    catalog: &SpeciesCatalog,
) -> String {
    match question {
        Question::FireInRegion => {
            answer_text(question, count_fire_in_region(api, &config.fire_region))
        }
        Question::TallWater => {
            answer_text(question, tall_water_pokemon(api, config.min_water_height))
        }
        Question::StarterEvolution => {
            answer_text(question, describe_evolution_chain(api, &config.starter))
        }
        Question::ElectricWithoutEvolution => {
            answer_text(question, electric_without_evolutions(api))
        }
        Question::HighestAttackInRegion => {
            answer_text(question, highest_attack_in_region(api, &config.attack_region))
        }
        Question::FastestNonLegendary => {
            answer_text(question, fastest_non_legendary(api, catalog))
        }
        Question::GrassHabitat => answer_text(question, most_common_grass_habitat(api)),
        Question::Lightest => answer_text(question, lightest_pokemon(api, catalog)),
    }
}

/// Run every question in order. `on_entry` sees each entry as soon as it is answered.
///
/// Always returns a full report: failed questions carry their failure sentence.
pub fn run_all(
    api: &PokeApi,
    config: &ExplorerConfig,
    mut on_entry: impl FnMut(&ReportEntry),
) -> Report {
    let catalog = SpeciesCatalog::new(config.catalog_page_size);
    let mut report = Report::new();

    for question in Question::ALL {
        let entry = ReportEntry {
            question,
            prompt: question.prompt(config),
            answer: answer(question, api, config, &catalog),
        };
        on_entry(&entry);
        report.push(entry);
    }

    info!(answered = report.entries().len(), "All questions processed");
    report
}
