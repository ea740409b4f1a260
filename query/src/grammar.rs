use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "sieve.pest"]
pub struct SelectionParser;
