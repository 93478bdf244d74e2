use crate::net::{Host, Port, Scheme};
use crate::path::Path;
use std::fmt::{self, Display, Formatter, Write};

const WILDCARD: char = '*';
const WILDCARD_CONTEXT_PATH: &str = "/*";
const WILDCARD_PREFIX: &str = "/**";

pub(crate) struct FieldSlices<'a> {
    pub schemes: Option<&'a [Scheme]>,
    pub hosts: Option<&'a [Host]>,
    pub ports: Option<&'a [Port]>,
    pub context_paths: Option<&'a [Path]>,
    pub prefixes: Option<&'a [Path]>,
}

pub(crate) fn render(f: &mut Formatter<'_>, fields: &FieldSlices<'_>) -> fmt::Result {
    if let Some(schemes) = fields.schemes {
        write_list(f, schemes, |f, scheme| scheme.fmt(f))?;
        f.write_char(':')?;
    }
    f.write_str("//")?;

    match fields.hosts {
        None => f.write_char(WILDCARD)?,
        Some(hosts) => write_list(f, hosts, |f, host| host.fmt(f))?,
    }

    match fields.ports {
        None => {
            f.write_char(':')?;
            f.write_char(WILDCARD)?;
        }
        Some([port]) => {
            // hidden only when it is the default of the one scheme given
            let implied = match fields.schemes {
                Some([scheme]) => scheme.default_port(),
                _ => None,
            };
            if implied != Some(port.number()) {
                write!(f, ":{}", port.number())?;
            }
        }
        Some(ports) => {
            f.write_char(':')?;
            write_list(f, ports, |f, port| write!(f, "{}", port.number()))?;
        }
    }

    match fields.context_paths {
        None => f.write_str(WILDCARD_CONTEXT_PATH)?,
        Some(context_paths) => write_list(f, context_paths, |f, context_path| {
            if context_path.is_root() {
                Ok(())
            } else {
                context_path.fmt(f)
            }
        })?,
    }

    match fields.prefixes {
        None => f.write_str(WILDCARD_PREFIX),
        Some(prefixes) => write_list(f, prefixes, |f, prefix| prefix.fmt(f)),
    }
}

fn write_list<T>(
    f: &mut Formatter<'_>,
    values: &[T],
    mut item: impl FnMut(&mut Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    if let [only] = values {
        return item(f, only);
    }
    f.write_char('{')?;
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            f.write_char(',')?;
        }
        item(f, value)?;
    }
    f.write_char('}')
}
