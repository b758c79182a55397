use std::io::{self, Write};

use env_logger::{Builder, Env, Target};
use log::Record;

fn write_record(out: &mut impl Write, record: &Record) -> io::Result<()> {
    writeln!(out, "[{}] : {}", record.level(), record.args())
}

/// diagnostics go to stdout as `[LEVEL] : message`. the level defaults to
/// info and is taken from RUST_LOG when set
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format(|buf, record| write_record(buf, record))
        .try_init();
}

#[cfg(test)]
mod tests {
    use std::io::Error;

    use log::{Level, Record};

    use super::{init, write_record};

    #[test]
    fn severity_prefix() -> Result<(), Error> {
        let mut out = Vec::new();
        write_record(
            &mut out,
            &Record::builder()
                .level(Level::Error)
                .args(format_args!("\"{}\" argument name is unknown", "bogus"))
                .build(),
        )?;
        assert_eq!(
            "[ERROR] : \"bogus\" argument name is unknown\n",
            String::from_utf8_lossy(&out)
        );
        Ok(())
    }

    #[test]
    fn init_twice() {
        init();
        init();
        log::info!("logger initialised");
    }
}
