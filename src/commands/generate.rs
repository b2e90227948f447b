//! Dictionary generation command
//!
//! Builds a dictionary offline by looking up every word of a word list on an
//! online word finder and collecting the subwords listed on the result page.
//! Requests are sequential, and the first failed request aborts the run.

use crate::dictionary::{self, Dictionary};
use anyhow::{Context, Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use scraper::{Html, Selector};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Word list read when none is given
pub const DEFAULT_WORD_LIST: &str = "en_words_1000.txt";

/// Dictionary written when no output is given
pub const DEFAULT_OUTPUT: &str = "user_dict.json";

/// Result buttons of the word finder, each carrying one subword in `data-word`
pub const SUBWORD_SELECTOR: &str = "button.btn.btn-grey.wordblock-link.changeable-word";

const WORD_FINDER_URL: &str = "https://wordfinderx.com/words-for";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/96.0.4664.93 Safari/537.36";

/// A source of word finder result pages
pub trait PageSource {
    /// Fetch the HTML page listing the subwords of `word`
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be retrieved.
    fn fetch(&self, word: &str) -> Result<String>;
}

/// Word finder client over HTTP
pub struct WordFinder {
    agent: ureq::Agent,
    base_url: String,
}

impl WordFinder {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(WORD_FINDER_URL)
    }

    /// Client for a different host serving the same page layout
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build();
        Self {
            agent,
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn url_for(&self, word: &str) -> String {
        format!(
            "{}/{word}/?dictionary=all_en",
            self.base_url.trim_end_matches('/')
        )
    }
}

impl Default for WordFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for WordFinder {
    fn fetch(&self, word: &str) -> Result<String> {
        let url = self.url_for(word);
        log::debug!("GET {url}");

        // Error pages are parsed like any other page; only transport failures abort
        let response = match self.agent.get(&url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, response)) => {
                log::warn!("'{word}': status {status}, parsing the error page");
                response
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Request for '{word}' failed"));
            }
        };
        response
            .into_string()
            .with_context(|| format!("Cannot read response for '{word}'"))
    }
}

/// Extract the subwords listed on a word finder result page
///
/// Buttons without a `data-word` attribute are skipped. Document order is kept.
///
/// # Errors
///
/// Returns an error if [`SUBWORD_SELECTOR`] cannot be parsed.
pub fn extract_subwords(html: &str) -> Result<Vec<String>> {
    let selector = Selector::parse(SUBWORD_SELECTOR)
        .map_err(|err| anyhow!("Invalid selector '{SUBWORD_SELECTOR}': {err:?}"))?;
    let document = Html::parse_document(html);

    Ok(document
        .select(&selector)
        .filter_map(|button| button.value().attr("data-word"))
        .map(str::to_string)
        .collect())
}

/// Read a word list with one word per line
///
/// Surrounding whitespace is trimmed and blank lines are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read word list '{}'", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Dictionary built from a word list, with lookup counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub dictionary: Dictionary,
    /// Pages fetched, one per qualifying word-list entry including repeats
    pub lookups: usize,
    /// Entries not longer than the minimum length
    pub skipped: usize,
}

/// Look up every word longer than `min_length` and collect its subwords
///
/// # Errors
///
/// Returns the first fetch or extraction error, naming the word.
pub fn generate_dictionary<S: PageSource + ?Sized>(
    source: &S,
    words: &[String],
    min_length: usize,
    progress: &ProgressBar,
) -> Result<Generation> {
    let mut dictionary = Dictionary::default();
    let mut lookups = 0;
    let mut skipped = 0;

    for word in words {
        progress.inc(1);
        if word.chars().count() <= min_length {
            skipped += 1;
            continue;
        }

        progress.set_message(word.clone());
        let page = source
            .fetch(word)
            .with_context(|| format!("Cannot look up '{word}'"))?;
        lookups += 1;
        let subwords = extract_subwords(&page)?;
        log::debug!("'{word}': {} subwords", subwords.len());

        dictionary.insert(word.as_str(), subwords);
    }

    Ok(Generation {
        dictionary,
        lookups,
        skipped,
    })
}

/// Configuration of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub words_path: PathBuf,
    pub min_length: usize,
    pub output: PathBuf,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from(DEFAULT_WORD_LIST),
            min_length: crate::game::MINIMAL_LENGTH,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Result of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub words_read: usize,
    pub words_looked_up: usize,
    pub words_skipped: usize,
    /// Distinct words in the written dictionary
    pub words_written: usize,
    pub total_subwords: usize,
    pub output: PathBuf,
}

/// Generate a dictionary from a word list and save it
///
/// # Errors
///
/// Returns an error if the word list cannot be read, a lookup fails, or the
/// dictionary cannot be written.
pub fn run_generate<S: PageSource + ?Sized>(
    config: &GenerateConfig,
    source: &S,
    show_progress: bool,
) -> Result<GenerateSummary> {
    let words = read_word_list(&config.words_path)?;
    log::info!(
        "read {} words from {}",
        words.len(),
        config.words_path.display()
    );

    let progress = if show_progress {
        let pb = ProgressBar::new(words.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let generated = generate_dictionary(source, &words, config.min_length, &progress);
    progress.finish_and_clear();
    let Generation {
        dictionary,
        lookups,
        skipped,
    } = generated?;

    dictionary::save_to_file(&dictionary, &config.output)?;

    Ok(GenerateSummary {
        words_read: words.len(),
        words_looked_up: lookups,
        words_skipped: skipped,
        words_written: dictionary.len(),
        total_subwords: dictionary.iter().map(|(_, subwords)| subwords.len()).sum(),
        output: config.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves canned pages and records every lookup
    struct FakePages {
        pages: HashMap<String, String>,
        requests: RefCell<Vec<String>>,
    }

    impl FakePages {
        fn new() -> Self {
            Self {
                pages: HashMap::new(),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn with(mut self, word: &str, subwords: &[&str]) -> Self {
            self.pages.insert(word.to_string(), page(subwords));
            self
        }
    }

    impl PageSource for FakePages {
        fn fetch(&self, word: &str) -> Result<String> {
            self.requests.borrow_mut().push(word.to_string());
            self.pages
                .get(word)
                .cloned()
                .ok_or_else(|| anyhow!("404 for {word}"))
        }
    }

    fn page(subwords: &[&str]) -> String {
        let buttons: String = subwords
            .iter()
            .map(|word| {
                format!(
                    r#"<button class="btn btn-grey wordblock-link changeable-word" data-word="{word}">{word}</button>"#
                )
            })
            .collect();
        format!("<html><body><div class=\"words\">{buttons}</div></body></html>")
    }

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|&s| s.to_string()).collect()
    }

    #[test]
    fn extract_subwords_in_document_order() {
        let html = page(&["garden", "danger", "grand"]);
        assert_eq!(
            extract_subwords(&html).unwrap(),
            vec!["garden", "danger", "grand"]
        );
    }

    #[test]
    fn extract_skips_other_buttons() {
        let html = r#"
            <button class="btn btn-grey wordblock-link changeable-word" data-word="heart">heart</button>
            <button class="btn btn-grey wordblock-link changeable-word">no data</button>
            <button class="btn btn-primary" data-word="menu">menu</button>
            <a class="btn btn-grey wordblock-link changeable-word" data-word="link">link</a>
            <button class="changeable-word wordblock-link btn-grey btn extra" data-word="earth">earth</button>
        "#;
        assert_eq!(extract_subwords(html).unwrap(), vec!["heart", "earth"]);
    }

    #[test]
    fn extract_from_empty_page() {
        assert!(extract_subwords("").unwrap().is_empty());
    }

    #[test]
    fn only_long_words_are_looked_up() {
        let source = FakePages::new()
            .with("garden", &["garden", "danger"])
            .with("thread", &["thread", "heart"]);
        let words = strings(&["cat", "stone", "garden", "thread"]);

        let generation =
            generate_dictionary(&source, &words, 5, &ProgressBar::hidden()).unwrap();
        let dictionary = &generation.dictionary;

        assert_eq!(*source.requests.borrow(), vec!["garden", "thread"]);
        assert_eq!(generation.lookups, 2);
        assert_eq!(generation.skipped, 2);
        assert_eq!(dictionary.len(), 2);
        assert_eq!(
            dictionary.get("thread").map(<[String]>::to_vec),
            Some(strings(&["thread", "heart"]))
        );
    }

    #[test]
    fn first_failure_aborts() {
        let source = FakePages::new().with("garden", &["garden"]);
        let words = strings(&["winter", "garden"]);

        let err = generate_dictionary(&source, &words, 5, &ProgressBar::hidden()).unwrap_err();

        assert!(err.to_string().contains("winter"));
        assert_eq!(*source.requests.borrow(), vec!["winter"]);
    }

    #[test]
    fn read_word_list_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "garden\n\n  thread \r\nwinter").unwrap();

        assert_eq!(
            read_word_list(&path).unwrap(),
            vec!["garden", "thread", "winter"]
        );
    }

    #[test]
    fn read_missing_word_list_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_word_list(dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn run_generate_writes_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let words_path = dir.path().join("words.txt");
        fs::write(&words_path, "stone\ngarden\n").unwrap();

        let config = GenerateConfig {
            words_path,
            min_length: 5,
            output: dir.path().join("user_dict.json"),
        };
        let source = FakePages::new().with("garden", &["garden", "danger", "grand"]);

        let summary = run_generate(&config, &source, false).unwrap();

        assert_eq!(summary.words_read, 2);
        assert_eq!(summary.words_looked_up, 1);
        assert_eq!(summary.words_skipped, 1);
        assert_eq!(summary.words_written, 1);
        assert_eq!(summary.total_subwords, 3);

        let saved = dictionary::load_from_file(&config.output).unwrap();
        assert_eq!(saved.get("garden").map(<[String]>::len), Some(3));
    }

    #[test]
    fn repeated_words_are_not_counted_as_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let words_path = dir.path().join("words.txt");
        fs::write(&words_path, "garden\nstone\ngarden\n").unwrap();

        let config = GenerateConfig {
            words_path,
            min_length: 5,
            output: dir.path().join("user_dict.json"),
        };
        let source = FakePages::new().with("garden", &["garden", "danger"]);

        let summary = run_generate(&config, &source, false).unwrap();

        assert_eq!(summary.words_read, 3);
        assert_eq!(summary.words_looked_up, 2);
        assert_eq!(summary.words_skipped, 1);
        assert_eq!(summary.words_written, 1);
        assert_eq!(*source.requests.borrow(), vec!["garden", "garden"]);
    }

    /// Serve a single HTTP response on a local port and return its base URL
    fn serve_once(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }

            let response = format!(
                "{status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        format!("http://{address}/words-for")
    }

    #[test]
    fn error_pages_are_parsed() {
        let base_url = serve_once("HTTP/1.1 404 Not Found", page(&["garden"]));
        let finder = WordFinder::with_base_url(base_url);

        let generation = generate_dictionary(
            &finder,
            &strings(&["garden"]),
            5,
            &ProgressBar::hidden(),
        )
        .unwrap();

        assert_eq!(
            generation.dictionary.get("garden").map(<[String]>::to_vec),
            Some(strings(&["garden"]))
        );
    }

    #[test]
    fn success_pages_are_parsed() {
        let base_url = serve_once("HTTP/1.1 200 OK", page(&["thread", "heart"]));
        let finder = WordFinder::with_base_url(base_url);

        let html = finder.fetch("thread").unwrap();

        assert_eq!(extract_subwords(&html).unwrap(), vec!["thread", "heart"]);
    }

    #[test]
    fn unreachable_host_aborts() {
        let address = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let finder = WordFinder::with_base_url(format!("http://{address}/words-for"));

        let err = generate_dictionary(
            &finder,
            &strings(&["garden"]),
            5,
            &ProgressBar::hidden(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("garden"));
    }

    #[test]
    fn failed_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let words_path = dir.path().join("words.txt");
        fs::write(&words_path, "garden\n").unwrap();

        let config = GenerateConfig {
            words_path,
            min_length: 5,
            output: dir.path().join("user_dict.json"),
        };
        let source = FakePages::new();

        assert!(run_generate(&config, &source, false).is_err());
        assert!(!config.output.exists());
    }

    #[test]
    fn url_for_word() {
        let finder = WordFinder::with_base_url("http://localhost:8080/words-for/");
        assert_eq!(
            finder.url_for("garden"),
            "http://localhost:8080/words-for/garden/?dictionary=all_en"
        );
        assert_eq!(
            WordFinder::new().url_for("garden"),
            "https://wordfinderx.com/words-for/garden/?dictionary=all_en"
        );
    }

    #[test]
    fn default_config_matches_defaults() {
        let config = GenerateConfig::default();
        assert_eq!(config.words_path, PathBuf::from("en_words_1000.txt"));
        assert_eq!(config.min_length, 5);
        assert_eq!(config.output, PathBuf::from("user_dict.json"));
    }
}
