use crate::preview::LivenessSnapshot;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

pub enum CurveFormat {
    Csv,
    Tsv,
    Json,
}

pub struct LivenessCurve {
    entries: Vec<LivenessSnapshot>,
}

impl LivenessCurve {
    pub fn push(&mut self, snapshot: LivenessSnapshot) {
        self.entries.push(snapshot)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn latest(&self) -> Option<LivenessSnapshot> {
        self.entries.last().cloned()
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: CurveFormat) -> Result<(), Error> {
        match fmt {
            CurveFormat::Csv => self.export_with_delimiter(path, ','),
            CurveFormat::Tsv => self.export_with_delimiter(path, '\t'),
            CurveFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = File::create(path)?;
        writeln!(
            w,
            "observations_seen{d}live_seen{d}dead_seen{d}live_fraction{d}seconds",
            d = delimiter
        )?;
        for s in &self.entries {
            writeln!(
                w,
                "{}{d}{}{d}{}{d}{:.12}{d}{:.6}",
                s.observations_seen,
                s.live_seen,
                s.dead_seen,
                s.live_fraction,
                s.seconds,
                d = delimiter
            )?;
        }
        Ok(())
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = File::create(path)?;
        serde_json::to_writer_pretty(&mut w, &self.entries)?;
        writeln!(w)?;
        Ok(())
    }
}

impl Default for LivenessCurve {
    fn default() -> Self {
        Self { entries: vec![] }
    }
}
