//! Interactive menu. The shell owns the catalog and hands it to each handler.

use crate::codec;
use crate::errors::AppError;
use crate::model::RecordUpdate;
use crate::prompt::Prompter;
use crate::store::RecordStore;
use crate::table::{self, NO_DATA};
use log::{debug, info, warn};
use std::io::{BufRead, Write};
use std::path::PathBuf;

const MENU: &str = "\nProgram Menu:\n\
1. View data\n\
2. Edit record\n\
3. Delete record\n\
4. Calculate average weight\n\
5. Save data to a file\n\
0. Exit";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    Edit,
    Delete,
    AverageWeight,
    Save,
    Exit,
}

impl TryFrom<i32> for MenuChoice {
    type Error = i32;

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(MenuChoice::View),
            2 => Ok(MenuChoice::Edit),
            3 => Ok(MenuChoice::Delete),
            4 => Ok(MenuChoice::AverageWeight),
            5 => Ok(MenuChoice::Save),
            0 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

fn load_failure_message(e: &AppError) -> String {
    match e {
        AppError::IO(_) => "Error opening file. Please try again.".to_string(),
        AppError::InvalidCount(_) => "Invalid record count in the file. Please try again.".to_string(),
        other => format!("Malformed data in the file ({}). Please try again.", other),
    }
}

/// Loads the startup catalog, retrying until a file loads.
///
/// `first` is tried before prompting. Only `InputClosed` (or a broken
/// output) ends the loop without a catalog.
pub fn load_interactive<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    first: Option<PathBuf>,
) -> Result<RecordStore, AppError> {
    let mut next = first;
    loop {
        let path = match next.take() {
            Some(path) => path,
            None => PathBuf::from(p.read_word("Enter the filename to load data: ")?),
        };
        match codec::load_catalog(&path) {
            Ok(records) => {
                p.say(format!("Data successfully loaded from file: {}", path.display()))?;
                return Ok(RecordStore::from_records(records));
            }
            Err(e) => {
                warn!("load {} failed: {}", path.display(), e);
                p.say(load_failure_message(&e))?;
            }
        }
    }
}

pub fn view<R: BufRead, W: Write>(store: &RecordStore, p: &mut Prompter<R, W>) -> Result<(), AppError> {
    if store.is_empty() {
        return p.say(NO_DATA);
    }
    p.say(table::render_table(store.records()).trim_end_matches('\n'))
}

pub fn edit<R: BufRead, W: Write>(store: &mut RecordStore, p: &mut Prompter<R, W>) -> Result<(), AppError> {
    let id = p.read_int("Enter the ID of the record to edit: ")?;
    if store.find_by_id(id).is_none() {
        return p.say(format!("Record with ID {} not found.", id));
    }

    p.say(format!("Editing record with ID {}:", id))?;
    let update = RecordUpdate {
        name: p.read_word("New name: ")?,
        manufacturer: p.read_word("New manufacturer: ")?,
        purpose: p.read_word("New purpose: ")?,
        frequency: p.read_float("New frequency (Hz): ")?,
        power: p.read_double("New power (W): ")?,
        weight: p.read_double("New weight (kg): ")?,
    };
    match store.edit(id, update) {
        Some(_) => p.say("Record updated successfully."),
        None => p.say(format!("Record with ID {} not found.", id)),
    }
}

pub fn delete<R: BufRead, W: Write>(store: &mut RecordStore, p: &mut Prompter<R, W>) -> Result<(), AppError> {
    let id = p.read_int("Enter the ID of the record to delete: ")?;
    match store.delete(id) {
        Some(_) => p.say(format!("Record with ID {} deleted.", id)),
        None => p.say(format!("Record with ID {} not found.", id)),
    }
}

pub fn average_weight<R: BufRead, W: Write>(store: &RecordStore, p: &mut Prompter<R, W>) -> Result<(), AppError> {
    match store.average_weight() {
        Some(avg) => p.say(format!("Average weight: {} kg", avg)),
        None => p.say(NO_DATA),
    }
}

pub fn save<R: BufRead, W: Write>(store: &RecordStore, p: &mut Prompter<R, W>) -> Result<(), AppError> {
    let filename = PathBuf::from(p.read_word("Enter the filename to save data: ")?);
    match codec::save_catalog(store.records(), &filename) {
        Ok(()) => p.say(format!("Data successfully saved to file {}.", filename.display())),
        Err(AppError::IO(msg)) => {
            warn!("save failed: {}", msg);
            p.say(format!("Error opening file for writing: {}", msg))
        }
        Err(AppError::InvalidField(msg)) => p.say(format!("Cannot save: {}", msg)),
        Err(e) => Err(e),
    }
}

pub struct Shell<R, W> {
    store: RecordStore,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: RecordStore, prompter: Prompter<R, W>) -> Self {
        Self { store, prompter }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (RecordStore, Prompter<R, W>) {
        (self.store, self.prompter)
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<(), AppError> {
        let p = &mut self.prompter;
        match choice {
            MenuChoice::View => view(&self.store, p),
            MenuChoice::Edit => edit(&mut self.store, p),
            MenuChoice::Delete => delete(&mut self.store, p),
            MenuChoice::AverageWeight => average_weight(&self.store, p),
            MenuChoice::Save => save(&self.store, p),
            MenuChoice::Exit => p.say("Exiting program."),
        }
    }

    /// Menu loop until `0` or end of input.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.prompter.say(MENU)?;
            let raw = match self.prompter.read_int("Enter your choice: ") {
                Ok(v) => v,
                Err(AppError::InputClosed) => {
                    info!("input closed at menu; exiting");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            let choice = match MenuChoice::try_from(raw) {
                Ok(c) => c,
                Err(other) => {
                    debug!("menu choice {} out of range", other);
                    self.prompter.say("Invalid choice. Try again.")?;
                    continue;
                }
            };

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(AppError::InputClosed) => {
                    info!("input closed during {:?}; exiting", choice);
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
            if choice == MenuChoice::Exit {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RadioRecord;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    const SAMPLE: &str = "2\n1 RadioA Acme Comm 100.5 5.0 1.2\n2 RadioB Zenith Nav 200.25 10.0 2.4\n";

    type TestPrompter = Prompter<Cursor<Vec<u8>>, Vec<u8>>;

    fn prompter(input: &str) -> TestPrompter {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: TestPrompter) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    fn sample_file(tmp: &TempDir) -> PathBuf {
        let path = tmp.path().join("radios.txt");
        fs::write(&path, SAMPLE).unwrap();
        path
    }

    #[test]
    fn load_retries_after_missing_file_and_bad_count() {
        let tmp = TempDir::new().unwrap();
        let good = sample_file(&tmp);
        let zero = tmp.path().join("zero.txt");
        fs::write(&zero, "0\n").unwrap();
        let input = format!(
            "{}\n{}\n{}\n",
            tmp.path().join("missing.txt").display(),
            zero.display(),
            good.display()
        );

        let mut p = prompter(&input);
        let store = load_interactive(&mut p, None).unwrap();
        assert_eq!(store.len(), 2);

        let out = output(p);
        assert!(out.contains("Error opening file. Please try again."));
        assert!(out.contains("Invalid record count in the file. Please try again."));
        assert!(out.contains(&format!("Data successfully loaded from file: {}", good.display())));
    }

    #[test]
    fn load_uses_initial_path_without_prompting() {
        let tmp = TempDir::new().unwrap();
        let good = sample_file(&tmp);
        let mut p = prompter("");
        let store = load_interactive(&mut p, Some(good)).unwrap();
        assert_eq!(store.len(), 2);
        assert!(!output(p).contains("Enter the filename"));
    }

    #[test]
    fn load_gives_up_when_input_closes() {
        let tmp = TempDir::new().unwrap();
        let mut p = prompter("");
        let res = load_interactive(&mut p, Some(tmp.path().join("missing.txt")));
        assert!(matches!(res, Err(AppError::InputClosed)));
    }

    #[test]
    fn scenario_delete_then_average() {
        let tmp = TempDir::new().unwrap();
        let mut p = prompter("");
        let store = load_interactive(&mut p, Some(sample_file(&tmp))).unwrap();

        let mut shell = Shell::new(store, prompter("3\n1\n4\n0\n"));
        shell.run().unwrap();
        let (store, p) = shell.into_parts();

        assert_eq!(
            store.records(),
            &[RadioRecord {
                id: 2,
                name: "RadioB".into(),
                manufacturer: "Zenith".into(),
                purpose: "Nav".into(),
                frequency: 200.25,
                power: 10.0,
                weight: 2.4,
            }]
        );
        let out = output(p);
        assert!(out.contains("Record with ID 1 deleted."));
        assert!(out.contains("Average weight: 2.4 kg"));
        assert!(out.contains("Exiting program."));
    }

    #[test]
    fn edit_prompts_all_fields_and_revalidates_numbers() {
        let tmp = TempDir::new().unwrap();
        let mut p = prompter("");
        let store = load_interactive(&mut p, Some(sample_file(&tmp))).unwrap();

        let script = "2\n2\nBase\nMotorola\nRelay\nfast\n450.5\n25\n3.5\n0\n";
        let mut shell = Shell::new(store, prompter(script));
        shell.run().unwrap();

        let rec = &shell.store().records()[1];
        assert_eq!(rec.name, "Base");
        assert_eq!(rec.manufacturer, "Motorola");
        assert_eq!(rec.purpose, "Relay");
        assert_eq!(rec.frequency, 450.5);
        assert_eq!(rec.power, 25.0);
        assert_eq!(rec.weight, 3.5);
        assert_eq!(shell.store().records()[0].name, "RadioA");

        let (_, p) = shell.into_parts();
        let out = output(p);
        assert!(out.contains("Invalid input. Try again."));
        assert!(out.contains("Record updated successfully."));
    }

    #[test]
    fn unknown_ids_and_choices_are_reported() {
        let tmp = TempDir::new().unwrap();
        let mut p = prompter("");
        let store = load_interactive(&mut p, Some(sample_file(&tmp))).unwrap();
        let before = store.clone();

        let mut shell = Shell::new(store, prompter("2\n99\n3\n98\n7\n0\n"));
        shell.run().unwrap();
        assert_eq!(shell.store(), &before);

        let (_, p) = shell.into_parts();
        let out = output(p);
        assert!(out.contains("Record with ID 99 not found."));
        assert!(out.contains("Record with ID 98 not found."));
        assert!(out.contains("Invalid choice. Try again."));
        assert!(!out.contains("New name: "));
    }

    #[test]
    fn view_and_average_on_empty_catalog() {
        let mut shell = Shell::new(RecordStore::default(), prompter("1\n4\n"));
        shell.run().unwrap();
        let (_, p) = shell.into_parts();
        assert_eq!(output(p).matches(NO_DATA).count(), 2);
    }

    #[test]
    fn save_writes_catalog_and_survives_bad_path() {
        let tmp = TempDir::new().unwrap();
        let mut p = prompter("");
        let store = load_interactive(&mut p, Some(sample_file(&tmp))).unwrap();
        let dest = tmp.path().join("saved.txt");
        let bad = tmp.path().join("no/such/dir.txt");

        let script = format!("5\n{}\n5\n{}\n0\n", bad.display(), dest.display());
        let mut shell = Shell::new(store.clone(), prompter(&script));
        shell.run().unwrap();

        assert_eq!(codec::load_catalog(&dest).unwrap(), store.records());
        let (_, p) = shell.into_parts();
        let out = output(p);
        assert!(out.contains("Error opening file for writing"));
        assert!(out.contains(&format!("Data successfully saved to file {}.", dest.display())));
    }
}
