//! Interactive numbered-menu shell.

use crate::commands;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use roomfit_domain::furniture::FIELD_DELIMITER;
use roomfit_domain::measurement::INCHES_PER_FOOT;
use roomfit_domain::{Measurement, Room};
use roomfit_store::Inventory;
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use std::path::{Path, PathBuf};

/// Source of input lines for the shell.
pub trait LineSource {
    /// Show `prompt` and read one line.
    ///
    /// Returns [`CliError::InputClosed`] once no more input is available.
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Terminal input backed by a rustyline editor with history.
pub struct EditorSource {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
}

impl EditorSource {
    /// Create an editor keeping at most `history_size` entries.
    pub fn new(history_size: usize) -> Result<Self> {
        let config = EditorConfig::builder()
            .max_history_size(history_size)
            .map_err(|e| CliError::Readline(e.to_string()))?
            .build();
        let editor = DefaultEditor::with_config(config)
            .map_err(|e| CliError::Readline(format!("Failed to initialize editor: {}", e)))?;

        Ok(Self {
            editor,
            history_path: None,
        })
    }

    /// Load history from `path` and remember it for [`EditorSource::save_history`].
    pub fn with_history(mut self, path: &Path) -> Self {
        let _ = self.editor.load_history(path);
        self.history_path = Some(path.to_path_buf());
        self
    }

    /// Write history back, if a history file was configured.
    pub fn save_history(&mut self) {
        if let Some(path) = &self.history_path {
            if let Err(e) = self.editor.save_history(path) {
                tracing::debug!(error = %e, "could not save shell history");
            }
        }
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str()).ok();
                    }
                    return Ok(line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Use option 6 to save and exit.");
                }
                Err(ReadlineError::Eof) => return Err(CliError::InputClosed),
                Err(e) => return Err(CliError::Readline(e.to_string())),
            }
        }
    }
}

/// Menu entries, numbered 1 to 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Add,
    ViewActive,
    Archive,
    ViewArchived,
    MeasureRoom,
    Exit,
}

impl MenuAction {
    const COUNT: usize = 6;

    fn from_choice(choice: usize) -> Option<Self> {
        match choice {
            1 => Some(Self::Add),
            2 => Some(Self::ViewActive),
            3 => Some(Self::Archive),
            4 => Some(Self::ViewArchived),
            5 => Some(Self::MeasureRoom),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The menu loop. Owns its input; the inventory is borrowed per session.
pub struct Shell<'a, S: LineSource> {
    input: S,
    formatter: &'a Formatter,
}

impl<'a, S: LineSource> Shell<'a, S> {
    /// Create a shell reading from `input`.
    pub fn new(input: S, formatter: &'a Formatter) -> Self {
        Self { input, formatter }
    }

    /// Give back the input source (e.g. to save history).
    pub fn into_input(self) -> S {
        self.input
    }

    /// Run until the user picks Exit or input ends. Saving is the caller's job.
    pub fn run(&mut self, inventory: &mut Inventory) -> Result<()> {
        loop {
            print_menu();

            let choice = match self.prompt_in_range("Enter choice (1-6): ", 1, MenuAction::COUNT) {
                Ok(choice) => choice,
                Err(CliError::InputClosed) => return Ok(()),
                Err(e) => return Err(e),
            };
            let Some(action) = MenuAction::from_choice(choice) else {
                println!("Invalid choice. Try again.");
                continue;
            };

            let result = match action {
                MenuAction::Add => self.add_furniture(inventory),
                MenuAction::ViewActive => commands::execute_list(inventory, self.formatter),
                MenuAction::Archive => self.archive_furniture(inventory),
                MenuAction::ViewArchived => {
                    commands::execute_list_archived(inventory, self.formatter)
                }
                MenuAction::MeasureRoom => self.measure_room(inventory),
                MenuAction::Exit => return Ok(()),
            };

            match result {
                Ok(()) => {}
                Err(CliError::InputClosed) => return Ok(()),
                Err(e) => eprintln!("{}", self.formatter.error(&e.to_string())),
            }
        }
    }

    fn add_furniture(&mut self, inventory: &mut Inventory) -> Result<()> {
        let name = self.input.read_line("Enter furniture name: ")?;
        let name = name.trim();
        if name.is_empty() {
            println!("{}", self.formatter.warning("Name cannot be empty."));
            return Ok(());
        }
        if name.contains(FIELD_DELIMITER) {
            println!(
                "{}",
                self.formatter
                    .warning(&format!("Name cannot contain '{}'.", FIELD_DELIMITER))
            );
            return Ok(());
        }

        let length = self.prompt_measurement("Length")?;
        let width = self.prompt_measurement("Width")?;
        let height = self.prompt_measurement("Height")?;

        commands::execute_add(inventory, name, length, width, height, self.formatter)
    }

    fn archive_furniture(&mut self, inventory: &mut Inventory) -> Result<()> {
        if inventory.active().is_empty() {
            println!("{}", self.formatter.warning("No furniture to archive."));
            return Ok(());
        }

        commands::execute_list(inventory, self.formatter)?;
        let last = inventory.active().len() - 1;
        let index =
            self.prompt_in_range(&format!("Enter index to archive (0 to {}): ", last), 0, last)?;

        commands::execute_archive(inventory, index, self.formatter)
    }

    fn measure_room(&mut self, inventory: &Inventory) -> Result<()> {
        println!("=== Room Measurement ===");
        let length = self.prompt_measurement("Room Length")?;
        let width = self.prompt_measurement("Room Width")?;
        let height = self.prompt_measurement("Room Height")?;

        let room = Room::new(length, width).with_height(height);
        commands::execute_fit(inventory, &room, self.formatter)
    }

    /// Re-prompt until the answer is an integer in `min..=max`.
    fn prompt_in_range(&mut self, prompt: &str, min: usize, max: usize) -> Result<usize> {
        loop {
            let line = self.input.read_line(prompt)?;
            match line.trim().parse::<i64>() {
                Ok(value) if value >= min as i64 && value <= max as i64 => return Ok(value as usize),
                Ok(_) => println!("Please enter a number between {} and {}.", min, max),
                Err(_) => println!("Invalid number format. Please enter digits only."),
            }
        }
    }

    /// Re-prompt until the answer is a non-negative integer.
    fn prompt_non_negative(&mut self, prompt: &str) -> Result<u32> {
        loop {
            let line = self.input.read_line(prompt)?;
            match line.trim().parse::<i64>() {
                Ok(value) if value < 0 => println!("Value cannot be negative."),
                Ok(value) => match u32::try_from(value) {
                    Ok(value) => return Ok(value),
                    Err(_) => println!("Value is too large."),
                },
                Err(_) => println!("Invalid input. Enter a valid number."),
            }
        }
    }

    fn prompt_measurement(&mut self, label: &str) -> Result<Measurement> {
        println!("Enter {}:", label);
        let feet = self.prompt_non_negative("  Feet: ")?;
        let inches = self.prompt_non_negative("  Inches (0-11): ")?;
        if inches >= INCHES_PER_FOOT {
            println!("Inches must be 0-11. Carrying whole feet...");
        }
        Ok(Measurement::new(feet, inches))
    }
}

fn print_menu() {
    println!();
    println!("{}", "=".repeat(50));
    println!("   ROOM & FURNITURE MEASUREMENT SYSTEM");
    println!("{}", "=".repeat(50));
    println!("1. Add Furniture");
    println!("2. View Current Furniture");
    println!("3. Archive Furniture (Move to Archive)");
    println!("4. View Archived Furniture");
    println!("5. Measure Room & Check Fit");
    println!("6. Exit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use roomfit_domain::Furniture;
    use std::collections::VecDeque;

    /// Feeds fixed answers, then reports closed input.
    struct ScriptedInput {
        lines: VecDeque<String>,
    }

    impl ScriptedInput {
        fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl LineSource for ScriptedInput {
        fn read_line(&mut self, _prompt: &str) -> Result<String> {
            self.lines.pop_front().ok_or(CliError::InputClosed)
        }
    }

    fn run_script(inventory: &mut Inventory, lines: &[&str]) -> ScriptedInput {
        let formatter = Formatter::new(OutputFormat::Plain, false);
        let mut shell = Shell::new(ScriptedInput::new(lines), &formatter);
        shell.run(inventory).unwrap();
        shell.into_input()
    }

    fn record(name: &str) -> Furniture {
        let m = Measurement::new(3, 0);
        Furniture::new(name, m, m, m).unwrap()
    }

    #[test]
    fn test_add_then_exit() {
        let mut inventory = Inventory::new();
        let rest = run_script(
            &mut inventory,
            &["1", "Sofa", "6", "0", "3", "0", "2", "6", "6", "unread"],
        );

        let expected = Furniture::new(
            "Sofa",
            Measurement::new(6, 0),
            Measurement::new(3, 0),
            Measurement::new(2, 6),
        )
        .unwrap();
        assert_eq!(inventory.active(), &[expected]);
        assert_eq!(rest.lines.len(), 1, "exit should stop reading input");
    }

    #[test]
    fn test_invalid_menu_input_reprompts() {
        let mut inventory = Inventory::new();
        let rest = run_script(&mut inventory, &["abc", "9", "0", "-1", "2", "4", "6"]);
        assert!(rest.lines.is_empty());
        assert!(inventory.active().is_empty());
    }

    #[test]
    fn test_measurement_prompts_reject_bad_values_and_carry_inches() {
        let mut inventory = Inventory::new();
        run_script(
            &mut inventory,
            &[
                "1", "Desk", "-3", "x", "4", "14", "2", "0", "2", "99999999999", "0", "6",
            ],
        );

        let desk = &inventory.active()[0];
        assert_eq!(desk.length, Measurement::new(5, 2));
        assert_eq!(desk.width, Measurement::new(2, 0));
        assert_eq!(desk.height, Measurement::new(2, 0));
    }

    #[test]
    fn test_empty_or_delimited_name_aborts_add() {
        let mut inventory = Inventory::new();
        run_script(&mut inventory, &["1", "   ", "1", "a|b", "6"]);
        assert!(inventory.active().is_empty());
    }

    #[test]
    fn test_archive_reprompts_out_of_range_index() {
        let mut inventory = Inventory::new();
        inventory.add(record("Chair"));
        inventory.add(record("Lamp"));

        run_script(&mut inventory, &["3", "7", "1", "6"]);

        assert_eq!(inventory.active(), &[record("Chair")]);
        assert_eq!(inventory.archived(), &[record("Lamp")]);
    }

    #[test]
    fn test_archive_with_empty_list() {
        let mut inventory = Inventory::new();
        let rest = run_script(&mut inventory, &["3", "6"]);
        assert!(rest.lines.is_empty());
        assert!(inventory.archived().is_empty());
    }

    #[test]
    fn test_measure_room_leaves_inventory_untouched() {
        let mut inventory = Inventory::new();
        inventory.add(record("Chair"));
        let before = inventory.clone();

        run_script(
            &mut inventory,
            &["5", "10", "6", "8", "0", "8", "0", "6"],
        );
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_input_closed_mid_add_ends_session() {
        let mut inventory = Inventory::new();
        let rest = run_script(&mut inventory, &["1", "Chair", "2"]);
        assert!(rest.lines.is_empty());
        assert!(inventory.active().is_empty());
    }
}
