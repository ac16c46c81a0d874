use serde::Serialize;

/// One piece of radio equipment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RadioRecord {
    pub id: i32,
    pub name: String,
    pub manufacturer: String,
    pub purpose: String,
    pub frequency: f32, // Hz
    pub power: f64,     // W
    pub weight: f64,    // kg
}

/// Replacement values for every field except `id`. Edits always apply all six.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordUpdate {
    pub name: String,
    pub manufacturer: String,
    pub purpose: String,
    pub frequency: f32,
    pub power: f64,
    pub weight: f64,
}

impl RadioRecord {
    pub fn apply(&mut self, update: RecordUpdate) {
        self.name = update.name;
        self.manufacturer = update.manufacturer;
        self.purpose = update.purpose;
        self.frequency = update.frequency;
        self.power = update.power;
        self.weight = update.weight;
    }
}
