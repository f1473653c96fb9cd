use anyhow::Result;
use std::io::{BufRead, Write};

use crate::input::{parse_distances, DistanceRange, Prompter};
use crate::output::{
    format_average_line, format_club_help, format_distance_prompt, format_distances,
};
use crate::stats::{record_distances, remove_distances, ClubSet, StatsStore};

/// Something that can show a club's recent shots as a trend line
pub trait TrendDisplay {
    fn show_trend(&mut self, club: &str, shots: &[u32]) -> Result<()>;
}

impl<T: TrendDisplay + ?Sized> TrendDisplay for &mut T {
    fn show_trend(&mut self, club: &str, shots: &[u32]) -> Result<()> {
        (**self).show_trend(club, shots)
    }
}

/// Choice made at the quit/delete/continue menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Quit,
    Continue,
}

enum DistanceInput {
    Parsed(Vec<u32>),
    Invalid,
    Closed,
}

/// Interactive tracking loop: pick a club, enter distances, optionally retract
/// some, record them, optionally view the trend, then quit/delete/continue.
pub struct Session<'a, R, W, T> {
    prompter: Prompter<R, W>,
    store: &'a StatsStore,
    clubs: &'a ClubSet,
    range: DistanceRange,
    trend: T,
    use_colors: bool,
    verbose: bool,
}

impl<'a, R: BufRead, W: Write, T: TrendDisplay> Session<'a, R, W, T> {
    pub fn new(prompter: Prompter<R, W>, store: &'a StatsStore, clubs: &'a ClubSet, trend: T) -> Self {
        Self {
            prompter,
            store,
            clubs,
            range: DistanceRange::default(),
            trend,
            use_colors: false,
            verbose: false,
        }
    }

    pub fn with_range(mut self, range: DistanceRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            // Reload every round so a delete from the menu takes effect
            let mut summary = self.store.load_or_initialize(self.clubs)?;
            self.prompter.say(&format_club_help(self.clubs))?;

            let Some(answer) = self.prompter.ask("Club to track")? else {
                return Ok(());
            };
            let club = ClubSet::normalize(&answer);

            if !summary.contains(&club) {
                self.prompter.say(
                    "\nInvalid/no club name given. Please check spelling based on the club names provided.",
                )?;
                if self.quit_or_delete()? == MenuAction::Quit {
                    return Ok(());
                }
                continue;
            }

            let entered = match self.read_distances(&format_distance_prompt(&club, self.range))? {
                DistanceInput::Parsed(distances) if !distances.is_empty() => {
                    let shown = format_distances(&distances);
                    if self.prompter.confirm("\nConfirm distances (y/n)", &shown)? {
                        Some(distances)
                    } else {
                        None
                    }
                }
                DistanceInput::Closed => return Ok(()),
                _ => None,
            };

            let Some(entered) = entered else {
                if self.quit_or_delete()? == MenuAction::Quit {
                    return Ok(());
                }
                continue;
            };

            let distances = self.offer_retraction(entered)?;
            let updated = record_distances(&mut summary, self.store, &club, &distances)?;
            if self.verbose {
                eprintln!(
                    "Recorded {} distance(s) for {} to {}",
                    distances.len(),
                    club,
                    self.store.path().display()
                );
            }

            self.prompter.say("")?;
            self.prompter
                .say(&format_average_line(&club, &updated, self.use_colors))?;

            if updated.has_full_trend() {
                let answer = self.prompter.ask("\nShow trend line? (y/n)")?;
                if answer.as_deref() == Some("y") {
                    self.trend.show_trend(&club, &updated.recent_15.to_vec())?;
                }
            }

            if self.quit_or_delete()? == MenuAction::Quit {
                return Ok(());
            }
        }
    }

    /// Give back the prompter (used to inspect output in tests)
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompter
    }

    fn read_distances(&mut self, message: &str) -> Result<DistanceInput> {
        let Some(line) = self.prompter.prompt(message)? else {
            return Ok(DistanceInput::Closed);
        };

        match parse_distances(&line, self.range) {
            Ok(distances) => Ok(DistanceInput::Parsed(distances)),
            Err(e) => {
                if self.verbose {
                    eprintln!("Distance parse failed: {}", e);
                }
                self.prompter.say(
                    "\nInvalid input. Please type valid integer numbers with spaces between them.",
                )?;
                Ok(DistanceInput::Invalid)
            }
        }
    }

    /// Let the user drop mistyped distances before they are recorded
    fn offer_retraction(&mut self, entered: Vec<u32>) -> Result<Vec<u32>> {
        let answer = self.prompter.ask(&format!(
            "\nScores entered: {}\nIf you mistyped or want to delete any of these scores, please enter 'd'",
            format_distances(&entered)
        ))?;
        if answer.as_deref() != Some("d") {
            return Ok(entered);
        }

        let to_remove = loop {
            match self.read_distances("\nDistances to delete")? {
                DistanceInput::Parsed(distances) => break distances,
                DistanceInput::Invalid => continue,
                DistanceInput::Closed => return Ok(entered),
            }
        };

        let shown = format_distances(&to_remove);
        if self
            .prompter
            .confirm("\nConfirm distances to delete (y/n)", &shown)?
        {
            Ok(remove_distances(&entered, &to_remove))
        } else {
            Ok(entered)
        }
    }

    fn quit_or_delete(&mut self) -> Result<MenuAction> {
        let choice = self.prompter.ask(
            "\nEnter 'q' for quit, 'd' for delete all golf data, or anything else to continue",
        )?;

        match choice.as_deref() {
            None | Some("q") => Ok(MenuAction::Quit),
            Some("d") => {
                self.store.delete_all()?;
                if self.verbose {
                    eprintln!("Deleted {}", self.store.path().display());
                }
                self.prompter.say("\nAll golf data deleted.")?;
                Ok(MenuAction::Continue)
            }
            Some(_) => Ok(MenuAction::Continue),
        }
    }
}
