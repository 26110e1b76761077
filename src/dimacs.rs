use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, line_ending, multispace0, not_line_ending, space0, space1};
use nom::combinator::{map_res, opt};
use nom::sequence::{preceded, terminated};

use crate::error::Error;


/// converts a nom error into a crate error
fn parse_error(e:nom::Err<nom::error::Error<&str>>) -> Error {
    Error::Parse(e.to_string())
}

/// reads an instance from file, returns (n,m,adj_list)
pub fn read_from_file(filename:&str) -> Result<(usize, usize, Vec<Vec<usize>>), Error> {
    let content = fs::read_to_string(filename).map_err(|e| Error::io(filename, e))?;
    read_from_str(&content)
}

/** reads an instance from its DIMACS encoding, returns (n,m,adj_list).
Edges given twice (both directions) are only inserted once.
*/
pub fn read_from_str(content:&str) -> Result<(usize, usize, Vec<Vec<usize>>), Error> {
    let s1 = content.replace("\r","");
    let (s2,_) = skip_comments(s1.as_str()).map_err(parse_error)?;
    let (mut s3,(n,m)) = read_header(s2).map_err(parse_error)?;
    let mut adj_list:Vec<Vec<usize>> = vec![Vec::new();n];
    let mut check_nb_edges = 0;
    loop {
        let (tmp,_) = skip_comments(s3).map_err(parse_error)?;
        let (tmp,(a,b)) = match read_edge(tmp) {
            Ok(res) => res,
            Err(_) => { s3 = tmp; break; }
        };
        s3 = tmp;
        if a == 0 || b == 0 || a > n || b > n {
            return Err(Error::Parse(format!("edge ({},{}) out of range (n={})", a, b, n)));
        }
        if a == b {
            return Err(Error::Parse(format!("self-loop on vertex {}", a)));
        }
        check_nb_edges += 1;
        if !adj_list[a-1].contains(&(b-1)) { // WARNING: indices start at 1 in the DIMACS format
            adj_list[a-1].push(b-1);
            adj_list[b-1].push(a-1);
        }
    }
    let (rest,_) = multispace0::<&str, nom::error::Error<&str>>(s3).map_err(parse_error)?;
    if !rest.is_empty() {
        let line = rest.lines().next().unwrap_or_default();
        return Err(Error::Parse(format!("unexpected line: '{}'", line)));
    }
    if check_nb_edges != m && 2*check_nb_edges != m {
        return Err(Error::Parse(format!(
            "header announces {} edges, found {}", m, check_nb_edges
        )));
    }
    Ok((n, m, adj_list))
}

/// skips a single comment (and the blank lines before it)
fn skip_comment(s:&str) -> IResult<&str, &str> {
    preceded(
        multispace0,
        preceded(tag("c"), terminated(not_line_ending, opt(line_ending)))
    )(s)
}

/// skips all comments
pub fn skip_comments(s:&str) -> IResult<&str, Vec<&str>> {
    nom::multi::many0(skip_comment)(s)
}

/// reads a single number
fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers separated by a space (and the end of the line if any)
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    let (s, n1) = read_integer(s)?;
    let (s, _) = space1(s)?;
    let (s, n2) = read_integer(s)?;
    let (s, _) = space0(s)?;
    let (s, _) = opt(line_ending)(s)?;
    Ok((s, (n1,n2)))
}

/// reads header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    let (remaining,_) = preceded(multispace0, alt((tag("p edge "), tag("p col "))))(s)?;
    read_two_integers(remaining)
}

/// reads edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    let (remaining,_) = preceded(multispace0, tag("e "))(s)?;
    read_two_integers(remaining)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_instance() {
        let (n,m,adj_list) = read_from_file("insts/grid2x2.col").unwrap();
        assert_eq!(n, 4);
        assert_eq!(m, 4);
        assert_eq!(adj_list[0], vec![1,2]);
    }

    #[test]
    fn test_read_comment1() {
        let s = "c this is a test comment\np edge 2 1\ne 1 2";
        assert_eq!(
            skip_comments(s),
            Ok((
                "p edge 2 1\ne 1 2",
                vec![" this is a test comment"]
            ))
        );
    }

    #[test]
    fn test_read_header() {
        let s = "p edge 2 1\ne 1 2";
        assert_eq!(read_header(s).unwrap().0, "e 1 2");
        assert_eq!(read_header(s).unwrap().1, (2,1));
    }

    #[test]
    fn test_read_header_col() {
        let s = "p col 2 1\ne 1 2";
        assert_eq!(read_header(s).unwrap().0, "e 1 2");
        assert_eq!(read_header(s).unwrap().1, (2,1));
    }

    #[test]
    fn test_read_edge() {
        let s = "e 1 2\n";
        assert_eq!(read_edge(s).unwrap().1, (1,2));
        assert_eq!(read_edge(s).unwrap().0, "");
    }

    #[test]
    fn test_read_edges_in_both_directions() {
        let (n,m,adj_list) = read_from_str("p edge 3 4\ne 1 2\ne 2 1\ne 2 3\ne 3 2\n").unwrap();
        assert_eq!((n,m), (3,4));
        assert_eq!(adj_list, vec![vec![1], vec![0,2], vec![1]]);
    }

    #[test]
    fn test_read_comments_between_edges() {
        let (n,_,adj_list) = read_from_str("c head\np col 3 2\ne 1 2\nc middle\ne 2 3\n\n").unwrap();
        assert_eq!(n, 3);
        assert_eq!(adj_list[1], vec![0,2]);
    }

    #[test]
    fn test_read_malformed() {
        assert!(matches!(read_from_str("e 1 2\n"), Err(Error::Parse(_))));
        assert!(matches!(read_from_str("p edge 2 1\ne 1 3\n"), Err(Error::Parse(_))));
        assert!(matches!(read_from_str("p edge 2 1\ne 1 1\n"), Err(Error::Parse(_))));
        assert!(matches!(read_from_str("p edge 2 3\ne 1 2\n"), Err(Error::Parse(_))));
        assert!(matches!(read_from_str("p edge 2 1\ne 1 2\nfoo\n"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(read_from_file("insts/does-not-exist.col"), Err(Error::Io{..})));
    }
}
