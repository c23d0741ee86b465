pub mod confirmation;
pub mod upload_routine;

#[cfg(test)]
mod fakes;
