use crate::coords::{Triangle, Vec2};

/// Number of vertices `generate` emits for `depth`: `3^(depth + 1)`.
///
/// Returns `None` when the count does not fit in `usize`.
pub fn vertex_count(depth: u32) -> Option<usize> {
    3usize.checked_pow(depth.checked_add(1)?)
}

/// Generates the Sierpinski gasket over the seed triangle `(a, b, c)`.
///
/// At `depth == 0` the result is exactly `[a, b, c]`. Otherwise the triangle
/// is split at its edge midpoints and only the three corner sub-triangles are
/// recursed into, in the order corner `a`, corner `b`, corner `c`. The central
/// triangle `(ab, bc, ac)` is never emitted.
///
/// The result is deterministic and has `vertex_count(depth)` entries.
///
/// # Panics
///
/// Panics if the vertex count overflows `usize`, which cannot happen for any
/// depth that would fit in memory.
pub fn generate(depth: u32, a: Vec2, b: Vec2, c: Vec2) -> Vec<Vec2> {
    let count = vertex_count(depth).expect("gasket vertex count overflows usize");
    let mut out = Vec::with_capacity(count);
    subdivide(depth, a, b, c, &mut out);
    debug_assert_eq!(out.len(), count);
    out
}

fn subdivide(depth: u32, a: Vec2, b: Vec2, c: Vec2, out: &mut Vec<Vec2>) {
    if depth == 0 {
        out.extend_from_slice(&[a, b, c]);
        return;
    }

    let ab = a.midpoint(b);
    let ac = a.midpoint(c);
    let bc = b.midpoint(c);

    subdivide(depth - 1, a, ab, ac, out);
    subdivide(depth - 1, ab, b, bc, out);
    subdivide(depth - 1, ac, bc, c, out);
}

/// Same output as [`generate`], using an explicit stack instead of recursion.
///
/// Children are pushed in reverse so that the corner-`a` branch is popped
/// first, which keeps the emission order identical to the recursive form.
pub fn generate_iterative(depth: u32, a: Vec2, b: Vec2, c: Vec2) -> Vec<Vec2> {
    let count = vertex_count(depth).expect("gasket vertex count overflows usize");
    let mut out = Vec::with_capacity(count);

    // Depth-first: at most 2 pending siblings per level plus the current node.
    let mut stack: Vec<(u32, Triangle)> = Vec::with_capacity(2 * depth as usize + 1);
    stack.push((depth, Triangle::new(a, b, c)));

    while let Some((level, t)) = stack.pop() {
        if level == 0 {
            out.extend_from_slice(&t.corners());
            continue;
        }

        let ab = t.a.midpoint(t.b);
        let ac = t.a.midpoint(t.c);
        let bc = t.b.midpoint(t.c);

        stack.push((level - 1, Triangle::new(ac, bc, t.c)));
        stack.push((level - 1, Triangle::new(ab, t.b, bc)));
        stack.push((level - 1, Triangle::new(t.a, ab, ac)));
    }

    out
}

impl Triangle {
    /// Gasket vertices with this triangle as the seed.
    pub fn gasket(&self, depth: u32) -> Vec<Vec2> {
        generate(depth, self.a, self.b, self.c)
    }
}
