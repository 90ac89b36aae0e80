mod cli;
mod load;
mod properties;
mod scenarios;
