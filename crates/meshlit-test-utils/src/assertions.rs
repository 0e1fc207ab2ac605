// MeshLit - OBJ meshes to array literals
// Copyright (C) 2025 MeshLit Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published
// by the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.

//! Custom assertions for emitted array literals.

/// Extract the body of the array literal declared by `declaration`
/// (e.g. `ICOSPHERE_FACES`): everything between the opening `{` line and
/// the closing `};` line.
pub fn literal_body<'a>(output: &'a str, declaration: &str) -> &'a str {
    let header = format!("{} = {{\n", declaration);
    let start = output
        .find(&header)
        .unwrap_or_else(|| panic!("declaration {} not found in output:\n{}", declaration, output))
        + header.len();
    let end = output[start..]
        .find("\n};")
        .unwrap_or_else(|| panic!("unterminated literal {}", declaration))
        + start;
    &output[start..end]
}

/// Count `{...},` groups in a literal body.
pub fn count_groups(body: &str) -> usize {
    body.matches("},").count()
}

/// Parse face groups back out of a literal body.
pub fn parse_face_groups(body: &str) -> Vec<Vec<i64>> {
    body.split("},")
        .filter_map(|chunk| chunk.split_once('{').map(|(_, inner)| inner))
        .map(|inner| {
            inner
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.parse::<i64>().expect("face index"))
                .collect()
        })
        .collect()
}

/// Assert the face literal for `declaration` holds exactly `expected` groups,
/// wrapped `per_line` groups to a line.
pub fn assert_face_literal(output: &str, declaration: &str, expected: &[Vec<i64>], per_line: usize) {
    let body = literal_body(output, declaration);
    assert_eq!(parse_face_groups(body), expected, "face groups differ");

    let lines: Vec<&str> = body.split('\n').collect();
    let expected_lines = expected.len().div_ceil(per_line).max(1);
    assert_eq!(lines.len(), expected_lines, "unexpected wrapping:\n{}", body);
    for line in &lines[..lines.len() - 1] {
        assert_eq!(count_groups(line), per_line, "short line: {:?}", line);
    }
}

/// Assert that a meshlit command succeeds.
#[macro_export]
macro_rules! assert_meshlit_success {
    ($($arg:expr),+ $(,)?) => {
        $crate::meshlit()
            $(.arg($arg))+
            .assert()
            .success()
    };
}

/// Assert that a meshlit command fails.
#[macro_export]
macro_rules! assert_meshlit_failure {
    ($($arg:expr),+ $(,)?) => {
        $crate::meshlit()
            $(.arg($arg))+
            .assert()
            .failure()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "private static final int[][] X_FACES = {\n    {0, 1, 2},     {2, 1, 3}, \n    {4, 5, 6}, \n};\n";

    #[test]
    fn test_literal_body_and_groups() {
        let body = literal_body(SAMPLE, "X_FACES");
        assert_eq!(count_groups(body), 3);
        assert_eq!(
            parse_face_groups(body),
            vec![vec![0, 1, 2], vec![2, 1, 3], vec![4, 5, 6]]
        );
    }

    #[test]
    fn test_assert_face_literal() {
        assert_face_literal(
            SAMPLE,
            "X_FACES",
            &[vec![0, 1, 2], vec![2, 1, 3], vec![4, 5, 6]],
            2,
        );
    }
}
