use crate::error::{Error, Result};
use crate::{EmitArgs, HostArgs};

use consolebridge_logger::ConsoleLoggerProvider;
use serde_json::Value;

/// Exception text given on the command line.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct ExceptionText(String);

enum Record {
    Text(String),
    Value(Value),
    Table(Vec<Value>),
}

impl Record {
    fn parse(args: &EmitArgs) -> Result<Self> {
        if args.table {
            match serde_json::from_str(&args.message)? {
                Value::Array(rows) => Ok(Self::Table(rows)),
                _ => Err(Error::NotATable),
            }
        } else if args.json {
            Ok(Self::Value(serde_json::from_str(&args.message)?))
        } else {
            Ok(Self::Text(args.message.clone()))
        }
    }
}

pub async fn emit(host: &HostArgs, args: EmitArgs) -> Result<()> {
    let record = Record::parse(&args)?;
    let exception = args.exception.map(ExceptionText);
    let exception = exception
        .as_ref()
        .map(|e| e as &(dyn std::error::Error + 'static));

    let context = super::start_host(host)?;

    let logger = ConsoleLoggerProvider::new(context.boundary())
        .with_min_level(args.min_level)
        .create_logger(args.category);

    let result = match record {
        Record::Text(message) => logger.try_log(args.level, message, exception),
        Record::Value(value) => logger.try_log_value(args.level, &value, exception),
        Record::Table(rows) => logger.try_log_table(args.level, &rows),
    };

    context.shutdown().await;

    result.map_err(Into::into)
}
