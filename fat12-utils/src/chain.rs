use std::io::Write;

use fat12::{VolumeImage, ROOT};

use crate::error::Error;

fn split(file: &str) -> Result<(&str, &str), Error> {
    let (name, extension) = file.split_once('.').unwrap_or((file, ""));
    if name.is_empty() || name.len() > 8 || extension.len() > 3 {
        return Err(Error::InvalidName(file.to_owned()));
    }
    Ok((name, extension))
}

pub fn chain<W: Write>(out: &mut W, image: &VolumeImage, file: &str) -> Result<(), Error> {
    let (name, extension) = split(file)?;
    let clusters = image.cluster_chain(ROOT, name, extension)?;
    let clusters: Vec<_> = clusters.iter().map(|cluster| cluster.to_string()).collect();
    writeln!(out, "{:<23}: {}", "Cluster chain", clusters.join(" -> "))?;
    Ok(())
}
