pub mod polynomial;

#[cfg(test)]
mod proptests;
