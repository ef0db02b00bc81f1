mod classification;
mod fingerprints;
