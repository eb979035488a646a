//! Bounding-box measurement for diagram elements.
//!
//! Overlays are positioned from the geometry of the element they decorate.
//! The measurement walks the owned element tree directly: there is no live
//! rendering environment to ask, so boxes are derived from the geometry
//! attributes of the drawable primitives. Path data is scanned
//! conservatively: control points are included, so the box never
//! undershoots a curve's anchor geometry.

use log::debug;

use anlage_core::geometry::Rect;

use super::Element;

/// Tags eligible as a target's primary shape, matched in document order.
const PRIMARY_SHAPES: &[&str] = &["rect", "path", "polygon", "ellipse"];

/// Computes the bounds of the element with the given id, in root
/// coordinates. See [`SvgDocument::bounds`](super::SvgDocument::bounds)
/// for the primary-shape rules.
pub(crate) fn element_bounds(root: &Element, id: &str) -> Option<Rect> {
    let (el, dx, dy) = find_with_offset(root, id, 0.0, 0.0)?;
    first_primary_bounds(el, dx, dy).or_else(|| subtree_bounds(el, dx, dy))
}

/// Locates the element by id, accumulating ancestor translations. The
/// returned offset excludes the element's own transform; the measurement
/// functions below apply it exactly once.
fn find_with_offset<'a>(
    el: &'a Element,
    id: &str,
    dx: f32,
    dy: f32,
) -> Option<(&'a Element, f32, f32)> {
    if el.id() == Some(id) {
        return Some((el, dx, dy));
    }
    let (tx, ty) = translation(el);
    el.children
        .iter()
        .find_map(|child| find_with_offset(child, id, dx + tx, dy + ty))
}

fn first_primary_bounds(el: &Element, dx: f32, dy: f32) -> Option<Rect> {
    let (tx, ty) = translation(el);
    let (dx, dy) = (dx + tx, dy + ty);
    if PRIMARY_SHAPES.contains(&el.name.as_str()) {
        return shape_bounds(el).map(|r| r.translated(dx, dy));
    }
    el.children
        .iter()
        .find_map(|child| first_primary_bounds(child, dx, dy))
}

/// Union of every measurable primitive in the subtree. Fallback for
/// targets without a primary shape (e.g. a group of circles or lines).
fn subtree_bounds(el: &Element, dx: f32, dy: f32) -> Option<Rect> {
    let (tx, ty) = translation(el);
    let (dx, dy) = (dx + tx, dy + ty);
    let mut acc = shape_bounds(el).map(|r| r.translated(dx, dy));
    for child in &el.children {
        if let Some(r) = subtree_bounds(child, dx, dy) {
            acc = Some(match acc {
                Some(a) => a.union(r),
                None => r,
            });
        }
    }
    acc
}

/// Local bounds of a single drawable primitive, before any transforms.
fn shape_bounds(el: &Element) -> Option<Rect> {
    match el.name.as_str() {
        "rect" => {
            let width = num_attr(el, "width")?;
            let height = num_attr(el, "height")?;
            Some(Rect::new(
                num_attr_or(el, "x", 0.0),
                num_attr_or(el, "y", 0.0),
                width,
                height,
            ))
        }
        "circle" => {
            let r = num_attr(el, "r")?;
            let cx = num_attr_or(el, "cx", 0.0);
            let cy = num_attr_or(el, "cy", 0.0);
            Some(Rect::new(cx - r, cy - r, r * 2.0, r * 2.0))
        }
        "ellipse" => {
            let rx = num_attr(el, "rx")?;
            let ry = num_attr(el, "ry")?;
            let cx = num_attr_or(el, "cx", 0.0);
            let cy = num_attr_or(el, "cy", 0.0);
            Some(Rect::new(cx - rx, cy - ry, rx * 2.0, ry * 2.0))
        }
        "line" => Some(Rect::from_corners(
            num_attr_or(el, "x1", 0.0),
            num_attr_or(el, "y1", 0.0),
            num_attr_or(el, "x2", 0.0),
            num_attr_or(el, "y2", 0.0),
        )),
        "polygon" | "polyline" => points_bounds(el.attr("points")?),
        "path" => path_bounds(el.attr("d")?),
        _ => None,
    }
}

fn num_attr(el: &Element, name: &str) -> Option<f32> {
    el.attr(name)?.trim().trim_end_matches("px").parse().ok()
}

fn num_attr_or(el: &Element, name: &str, default: f32) -> f32 {
    num_attr(el, name).unwrap_or(default)
}

/// Sums every `translate(..)` component of the element's transform.
/// Other transform functions are not applied to the measured geometry.
fn translation(el: &Element) -> (f32, f32) {
    let Some(transform) = el.attr("transform") else {
        return (0.0, 0.0);
    };
    let (mut tx, mut ty) = (0.0, 0.0);
    let mut saw_other = false;
    let mut rest = transform;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        let func = rest[..open].trim_matches(|c: char| c.is_whitespace() || c == ',');
        let args = scan_numbers(&rest[open + 1..open + close]);
        if func == "translate" {
            tx += args.first().copied().unwrap_or(0.0);
            ty += args.get(1).copied().unwrap_or(0.0);
        } else {
            saw_other = true;
        }
        rest = &rest[open + close + 1..];
    }
    if saw_other {
        debug!(transform; "Ignoring non-translate transform components");
    }
    (tx, ty)
}

fn points_bounds(points: &str) -> Option<Rect> {
    let numbers = scan_numbers(points);
    let mut pairs = numbers.chunks_exact(2);
    let first = pairs.next()?;
    let mut acc = Rect::new(first[0], first[1], 0.0, 0.0);
    for pair in pairs {
        acc = acc.union(Rect::new(pair[0], pair[1], 0.0, 0.0));
    }
    Some(acc)
}

/// Extracts every numeric token from an attribute value, tolerating comma,
/// whitespace, and sign-run separators (`"10-5"` yields `10` and `-5`).
fn scan_numbers(s: &str) -> Vec<f32> {
    let mut numbers = Vec::new();
    let mut token = String::new();
    for ch in s.chars() {
        match ch {
            '0'..='9' | '.' => token.push(ch),
            '-' | '+' => {
                if token.ends_with(['e', 'E']) {
                    token.push(ch);
                } else {
                    flush_number(&mut token, &mut numbers);
                    token.push(ch);
                }
            }
            'e' | 'E' if token.chars().last().is_some_and(|c| c.is_ascii_digit()) => {
                token.push(ch);
            }
            _ => flush_number(&mut token, &mut numbers),
        }
    }
    flush_number(&mut token, &mut numbers);
    numbers
}

fn flush_number(token: &mut String, numbers: &mut Vec<f32>) {
    if !token.is_empty() {
        if let Ok(value) = token.parse() {
            numbers.push(value);
        }
        token.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PathToken {
    Command(char),
    Number(f32),
}

fn tokenize_path(d: &str) -> Vec<PathToken> {
    let mut tokens = Vec::new();
    let mut token = String::new();
    let flush = |token: &mut String, tokens: &mut Vec<PathToken>| {
        if !token.is_empty() {
            if let Ok(value) = token.parse() {
                tokens.push(PathToken::Number(value));
            }
            token.clear();
        }
    };
    for ch in d.chars() {
        match ch {
            '0'..='9' | '.' => token.push(ch),
            '-' | '+' => {
                if token.ends_with(['e', 'E']) {
                    token.push(ch);
                } else {
                    flush(&mut token, &mut tokens);
                    token.push(ch);
                }
            }
            'e' | 'E' if token.chars().last().is_some_and(|c| c.is_ascii_digit()) => {
                token.push(ch);
            }
            c if c.is_ascii_alphabetic() => {
                flush(&mut token, &mut tokens);
                tokens.push(PathToken::Command(c));
            }
            _ => flush(&mut token, &mut tokens),
        }
    }
    flush(&mut token, &mut tokens);
    tokens
}

/// Conservative bounds of path data: every anchor and control point is
/// included, arc flags/radii contribute only their endpoint.
fn path_bounds(d: &str) -> Option<Rect> {
    let tokens = tokenize_path(d);
    let mut acc: Option<Rect> = None;
    let mut cmd: Option<char> = None;
    let (mut x, mut y) = (0.0f32, 0.0f32);
    let (mut sx, mut sy) = (0.0f32, 0.0f32);

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            PathToken::Command(c) => {
                cmd = Some(c);
                i += 1;
                if c.eq_ignore_ascii_case(&'z') {
                    x = sx;
                    y = sy;
                }
            }
            PathToken::Number(_) => {
                let Some(c) = cmd else {
                    // Numbers before any command: malformed, stop scanning.
                    break;
                };
                let rel = c.is_ascii_lowercase();
                let upper = c.to_ascii_uppercase();
                let arity = match upper {
                    'M' | 'L' | 'T' => 2,
                    'H' | 'V' => 1,
                    'S' | 'Q' => 4,
                    'C' => 6,
                    'A' => 7,
                    _ => break,
                };
                let Some(args) = take_numbers(&tokens, &mut i, arity) else {
                    break;
                };
                match upper {
                    'M' => {
                        (x, y) = endpoint(rel, x, y, args[0], args[1]);
                        (sx, sy) = (x, y);
                        include(&mut acc, x, y);
                        // Subsequent pairs are implicit linetos.
                        cmd = Some(if rel { 'l' } else { 'L' });
                    }
                    'L' | 'T' => {
                        (x, y) = endpoint(rel, x, y, args[0], args[1]);
                        include(&mut acc, x, y);
                    }
                    'H' => {
                        x = if rel { x + args[0] } else { args[0] };
                        include(&mut acc, x, y);
                    }
                    'V' => {
                        y = if rel { y + args[0] } else { args[0] };
                        include(&mut acc, x, y);
                    }
                    'S' | 'Q' => {
                        let (cx, cy) = endpoint(rel, x, y, args[0], args[1]);
                        include(&mut acc, cx, cy);
                        (x, y) = endpoint(rel, x, y, args[2], args[3]);
                        include(&mut acc, x, y);
                    }
                    'C' => {
                        let (c1x, c1y) = endpoint(rel, x, y, args[0], args[1]);
                        include(&mut acc, c1x, c1y);
                        let (c2x, c2y) = endpoint(rel, x, y, args[2], args[3]);
                        include(&mut acc, c2x, c2y);
                        (x, y) = endpoint(rel, x, y, args[4], args[5]);
                        include(&mut acc, x, y);
                    }
                    'A' => {
                        (x, y) = endpoint(rel, x, y, args[5], args[6]);
                        include(&mut acc, x, y);
                    }
                    _ => unreachable!("arity match covers all commands"),
                }
            }
        }
    }
    acc
}

fn endpoint(rel: bool, x: f32, y: f32, ax: f32, ay: f32) -> (f32, f32) {
    if rel { (x + ax, y + ay) } else { (ax, ay) }
}

fn include(acc: &mut Option<Rect>, x: f32, y: f32) {
    let point = Rect::new(x, y, 0.0, 0.0);
    *acc = Some(match acc.take() {
        Some(a) => a.union(point),
        None => point,
    });
}

fn take_numbers(tokens: &[PathToken], i: &mut usize, arity: usize) -> Option<Vec<f32>> {
    let mut args = Vec::with_capacity(arity);
    while args.len() < arity {
        match tokens.get(*i) {
            Some(PathToken::Number(value)) => {
                args.push(*value);
                *i += 1;
            }
            _ => return None,
        }
    }
    Some(args)
}
