use crate::base;

/// Returns a filesystem object anchored at a temporary directory. The `Fs` must
/// not outlive the returned `TempDir`.
pub fn tempfs() -> (base::Fs, tempfile::TempDir) {
    let td = tempfile::TempDir::new().unwrap();
    let fs = base::Fs::new(td.path());
    (fs, td)
}

fn parse<T>(s: &str) -> T
where
    T: std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    match s.parse() {
        Ok(obj) => obj,
        Err(e) => panic!("invalid {} fixture: {:?}", std::any::type_name::<T>(), e),
    }
}

/// Parsed contents of a dashboard directory. `None` stands for a missing
/// file.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct State {
    config: Option<base::Config>,
    rl: Option<base::Recordlist>,
    selections: Option<base::Selections>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a [`base::Config`] or its JSON.
    pub fn with_config(mut self, config: impl Into<Fixture<base::Config>>) -> Self {
        self.config = Some(config.into().0);
        self
    }

    pub fn with_rl(mut self, rl: &str) -> Self {
        self.rl = Some(parse(rl));
        self
    }

    pub fn with_selections(mut self, selections: &str) -> Self {
        self.selections = Some(parse(selections));
        self
    }

    /// Reads every file present in `fs`.
    pub fn from_fs(fs: &base::Fs) -> Self {
        fn read<T>(fs: &base::Fs) -> Option<T>
        where
            T: base::fs::Io,
            <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
        {
            fs.path::<T>().exists().then(|| fs.read::<T>().unwrap())
        }

        Self {
            config: read(fs),
            rl: read(fs),
            selections: read(fs),
        }
    }
}

/// A test object given either directly or as the text it parses from.
pub struct Fixture<T>(T);

impl From<base::Config> for Fixture<base::Config> {
    fn from(value: base::Config) -> Self {
        Self(value)
    }
}

impl From<&str> for Fixture<base::Config> {
    fn from(value: &str) -> Self {
        Self(parse(value))
    }
}

/// Raw file contents of a dashboard directory. `None` stands for a missing
/// file.
#[derive(Default)]
pub struct StrState<'a> {
    config: Option<&'a str>,
    rl: Option<&'a str>,
    selections: Option<&'a str>,
}

impl<'a> StrState<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, s: &'a str) -> Self {
        self.config = Some(s);
        self
    }

    pub fn with_rl(mut self, s: &'a str) -> Self {
        self.rl = Some(s);
        self
    }

    pub fn with_selections(mut self, s: &'a str) -> Self {
        self.selections = Some(s);
        self
    }

    /// Writes each file verbatim. Panics if a file's contents do not parse.
    pub fn to_fs(&self, fs: &base::Fs) {
        fn write<T>(fs: &base::Fs, contents: Option<&str>)
        where
            T: base::fs::Io,
            <T as std::str::FromStr>::Err: std::fmt::Debug,
        {
            if let Some(s) = contents {
                parse::<T>(s);
                std::fs::write(fs.path::<T>(), s).unwrap()
            }
        }

        write::<base::Config>(fs, self.config);
        write::<base::Recordlist>(fs, self.rl);
        write::<base::Selections>(fs, self.selections);
    }

    pub fn to_state(&self) -> State {
        State {
            config: self.config.map(parse),
            rl: self.rl.map(parse),
            selections: self.selections.map(parse),
        }
    }
}
