use std::{
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tempfile::TempDir;
use tracing::{debug, subscriber::DefaultGuard};
use tracing_subscriber::{EnvFilter, fmt, fmt::MakeWriter};

pub fn init_test_logging() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// 現在のスレッドで出力されたログを文字列として溜め込む。
///
/// `#[tokio::test]` の既定（カレントスレッド）ランタイム内で使う。
#[derive(Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// ガードが生きている間、このスレッドのログを取り込む。
    pub fn set_default(&self) -> DefaultGuard {
        let subscriber = fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// テスト用の一時出力ディレクトリ。ドロップ時に削除される。
pub fn temp_output_dir() -> TempDir {
    let dir = tempfile::Builder::new()
        .prefix("satfetch-test-")
        .tempdir()
        .expect("Failed to create temp dir");
    debug!(path = %dir.path().display(), "一時ディレクトリを作成しました");
    dir
}

/// ディレクトリ配下の全エントリを相対パスでソートして返す。
///
/// 存在しないディレクトリは空として扱う。
pub fn dir_snapshot(root: &Path) -> Vec<PathBuf> {
    let mut entries = Vec::new();
    collect_entries(root, root, &mut entries);
    entries.sort();
    entries
}

fn collect_entries(root: &Path, dir: &Path, entries: &mut Vec<PathBuf>) {
    let Ok(read_dir) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in read_dir.flatten() {
        let path = entry.path();
        if let Ok(relative) = path.strip_prefix(root) {
            entries.push(relative.to_path_buf());
        }
        if path.is_dir() {
            collect_entries(root, &path, entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_snapshot() {
        let tmp = temp_output_dir();
        std::fs::create_dir(tmp.path().join("a")).unwrap();
        std::fs::write(tmp.path().join("a").join("b.png"), b"x").unwrap();
        std::fs::write(tmp.path().join("c.txt"), b"y").unwrap();

        assert_eq!(
            dir_snapshot(tmp.path()),
            vec![
                PathBuf::from("a"),
                PathBuf::from("a/b.png"),
                PathBuf::from("c.txt"),
            ]
        );
    }

    #[test]
    fn test_log_capture() {
        let capture = LogCapture::default();
        {
            let _guard = capture.set_default();
            tracing::info!(sample_id = 3, "hello capture");
        }
        tracing::info!("not captured");

        let logs = capture.contents();
        assert!(logs.contains("hello capture"), "{logs}");
        assert!(logs.contains("sample_id=3"), "{logs}");
        assert!(!logs.contains("not captured"), "{logs}");
    }

    #[test]
    fn test_dir_snapshot_missing_dir() {
        let tmp = temp_output_dir();
        assert!(dir_snapshot(&tmp.path().join("missing")).is_empty());
    }
}
