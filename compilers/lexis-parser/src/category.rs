use lexis_protocol::{Category, LexicalCategory};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, multispace0, one_of},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{delimited, tuple},
    IResult,
};

use crate::ParseError;

/// Avila's verb-class labels: `v. 2ª cl.` and `v. 3ª cl.`
fn verb_class(input: &str) -> IResult<&str, LexicalCategory> {
    map(
        tuple((
            tag("v."),
            multispace0,
            one_of("23"),
            tag("ª"),
            multispace0,
            tag("cl."),
        )),
        |(_, _, class, _, _, _)| {
            if class == '2' {
                LexicalCategory::Verb2
            } else {
                LexicalCategory::Verb3
            }
        },
    )(input)
}

fn plain_label(input: &str) -> IResult<&str, LexicalCategory> {
    map(take_while1(|c: char| c.is_alphanumeric()), LexicalCategory::from_label)(input)
}

fn lexical_category(input: &str) -> IResult<&str, LexicalCategory> {
    delimited(multispace0, alt((verb_class, plain_label)), multispace0)(input)
}

/// Parses a single lexical category label such as `"adj"` or `"v. 2ª cl."`.
pub fn parse_lexical_category(input: &str) -> Result<LexicalCategory, ParseError> {
    all_consuming(lexical_category)(input)
        .map(|(_, category)| category)
        .map_err(|e| ParseError::from_nom(input, e))
}

/// Parses a comma-separated list of lexical categories, e.g. `"s, adj"`.
pub fn parse_category(input: &str) -> Result<Category, ParseError> {
    all_consuming(separated_list1(char(','), lexical_category))(input)
        .map(|(_, lexcat)| Category::new(lexcat))
        .map_err(|e| ParseError::from_nom(input, e))
}
