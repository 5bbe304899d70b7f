use crate::constants::ENTRY_SEPARATOR;
use anyhow::{anyhow, Context, Result};
use std::fmt::{self, Display};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Represents a saved DNS server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnsEntry {
    pub ip: String,
    /// `None` for entries synthesized from the current OS configuration
    pub label: Option<String>,
}

impl DnsEntry {
    /// Creates a new labelled `DnsEntry`.
    ///
    /// ### Arguments
    /// - `ip` - the address of the DNS server
    /// - `label` - a human readable name
    pub fn new(ip: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            label: Some(label.into()),
        }
    }

    /// Creates an entry without a label.
    pub fn unlabelled(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            label: None,
        }
    }
}

impl Display for DnsEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}{ENTRY_SEPARATOR}{label}", self.ip),
            None => write!(f, "{}", self.ip),
        }
    }
}

impl TryFrom<&str> for DnsEntry {
    type Error = anyhow::Error;

    fn try_from(line: &str) -> Result<Self> {
        let line = line.trim();

        if line.is_empty() {
            return Err(anyhow!("Failed to parse DNS entry from an empty line"));
        }

        let entry = match line.split_once(ENTRY_SEPARATOR) {
            Some((ip, label)) => DnsEntry::new(ip, label),
            None => DnsEntry::unlabelled(line),
        };

        Ok(entry)
    }
}

/// Represents the result of adding an entry to the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The address or the label was empty
    MissingField,
    /// The address or the label contains a control character such as a line break
    ControlCharacter,
    /// An entry with the same display string already exists
    Duplicate,
}

/// Represents the ordered list of saved DNS entries and its backing file.
#[derive(Debug)]
pub struct DnsStore {
    path: PathBuf,
    entries: Vec<DnsEntry>,
}

impl DnsStore {
    /// Creates an empty store backed by the given file.
    ///
    /// ### Arguments
    /// - `path` - path to the list file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    /// Creates a store and loads the entries saved in the given file.
    ///
    /// ### Arguments
    /// - `path` - path to the list file
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self::new(path);
        store.load()?;

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[DnsEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&DnsEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the index of the entry with the given display string.
    pub fn position(&self, display: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.to_string() == display)
    }

    /// Appends the entries of the backing file which are not in the store yet.
    ///
    /// The file order is kept.
    ///
    /// A missing file leaves the store untouched.
    pub fn load(&mut self) -> Result<()> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("DNS list file '{}' does not exist yet", self.path.display());
                return Ok(());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("failed to open DNS list file '{}'", self.path.display())
                })
            }
        };

        for line in BufReader::new(file).lines() {
            let line = line.context("failed to read DNS list file")?;
            let line = line.trim();

            if line.is_empty() || self.position(line).is_some() {
                continue;
            }

            self.entries.push(line.try_into()?);
        }

        debug!(
            "Loaded {} DNS entries from '{}'",
            self.entries.len(),
            self.path.display()
        );

        Ok(())
    }

    /// Overwrites the backing file with all entries, one display string per line.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
        }

        let file = File::create(&self.path)
            .with_context(|| format!("failed to create DNS list file '{}'", self.path.display()))?;
        let mut writer = BufWriter::new(file);

        for entry in &self.entries {
            writeln!(writer, "{entry}")?;
        }

        writer.flush().context("failed to write DNS list file")?;

        Ok(())
    }

    /// Adds a labelled entry to the end of the list and saves the list.
    ///
    /// The entry is not kept if saving fails.
    ///
    /// ### Arguments
    /// - `ip` - the address of the DNS server
    /// - `label` - a human readable name
    pub fn add(&mut self, ip: &str, label: &str) -> Result<AddOutcome> {
        let (ip, label) = (ip.trim(), label.trim());

        if ip.is_empty() || label.is_empty() {
            return Ok(AddOutcome::MissingField);
        }

        if ip.chars().chain(label.chars()).any(char::is_control) {
            return Ok(AddOutcome::ControlCharacter);
        }

        let entry = DnsEntry::new(ip, label);
        if self.position(&entry.to_string()).is_some() {
            return Ok(AddOutcome::Duplicate);
        }

        self.entries.push(entry);
        if let Err(e) = self.save() {
            self.entries.pop();
            return Err(e);
        }

        info!("Added DNS entry '{ip} - {label}'");

        Ok(AddOutcome::Added)
    }

    /// Removes the selected entry and saves the list.
    ///
    /// The entry is put back if saving fails.
    ///
    /// ### Arguments
    /// - `selected` - index of the selected entry
    ///
    /// ### Returns
    /// - `Option<DnsEntry>` - the removed entry, `None` if nothing was selected
    pub fn delete(&mut self, selected: Option<usize>) -> Result<Option<DnsEntry>> {
        let Some(index) = selected.filter(|&index| index < self.entries.len()) else {
            return Ok(None);
        };

        let entry = self.entries.remove(index);
        if let Err(e) = self.save() {
            self.entries.insert(index, entry);
            return Err(e);
        }

        info!("Deleted DNS entry '{entry}'");

        Ok(Some(entry))
    }

    /// Makes sure an entry for the current DNS configuration exists.
    ///
    /// An unlabelled entry is appended if no entry has the given display string.
    /// The store is not saved.
    ///
    /// ### Arguments
    /// - `current_dns` - display string of the current DNS servers
    ///
    /// ### Returns
    /// - `usize` - index of the matching entry
    pub fn reconcile(&mut self, current_dns: &str) -> usize {
        if let Some(index) = self.position(current_dns) {
            return index;
        }

        debug!("Current DNS '{current_dns}' is not saved, adding it to the list");
        self.entries.push(DnsEntry::unlabelled(current_dns));

        self.entries.len() - 1
    }
}
