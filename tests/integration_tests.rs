// tests/integration_tests.rs
//! Integration tests for the 4x4 matrix algebra properties.

use quadra::{Mat4, MatrixError, Vec4};

fn sample_vectors() -> Vec<Vec4> {
    vec![
        Vec4::new(1.0, 2.0, 3.0, 4.0),
        Vec4::new(-1.5, 0.0, 0.25, 8.0),
        Vec4::zero(),
        Vec4::new(100.0, -100.0, 0.5, 1.0),
    ]
}

fn sample_matrix() -> Mat4 {
    Mat4::from_rows(
        Vec4::new(2.0, 0.0, 1.0, 3.0),
        Vec4::new(0.5, 1.0, 0.0, -1.0),
        Vec4::new(4.0, 2.0, 1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

#[test]
fn test_identity_law() {
    let mut id = Mat4::default();
    id.identity();

    for v in sample_vectors() {
        assert_eq!(id * v, v);
    }

    let m = sample_matrix();
    let original = m.clone();
    let mut left = id;
    left.mult_mat4(&m);
    assert_eq!(left, original);
}

#[test]
fn test_zero_law() {
    let mut z = sample_matrix();
    z.zero();

    for v in sample_vectors() {
        assert_eq!(z * v, Vec4::zero());
    }
    assert_eq!(z.to_array_row_major(), [0.0; 16]);
    assert_eq!(z.to_array_col_major(), [0.0; 16]);
}

#[test]
fn test_row_and_col_major_consistency() {
    let m = sample_matrix();
    let row_major = m.to_array_row_major();
    let col_major = m.to_array_col_major();

    for i in 0..4 {
        for j in 0..4 {
            assert_eq!(col_major[j * 4 + i], row_major[i * 4 + j]);
            assert_eq!(row_major[i * 4 + j], m[i][j]);
        }
    }
}

#[test]
fn test_clone_isolation() {
    let m = sample_matrix();
    let before = m.to_array_row_major();

    let mut a = m.clone();
    a.zero();

    assert_eq!(m.to_array_row_major(), before);
    assert_eq!(a, Mat4::new(0.0));
}

#[test]
fn test_construction_validation() {
    let rows = sample_vectors();

    let result = Mat4::from_row_array(&rows[..3]);
    assert!(matches!(result, Err(MatrixError::InvalidArgument { expected: 4, found: 3 })));

    let mut five = rows.clone();
    five.push(Vec4::new(1.0, 1.0, 1.0, 1.0));
    let result = Mat4::from_row_array(&five);
    assert!(matches!(result, Err(MatrixError::InvalidArgument { found: 5, .. })));

    let m = Mat4::from_row_array(&rows).unwrap();
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(m[i], *row);
    }
}

#[test]
fn test_multiplication_scenario() {
    let a = Mat4::from_rows(
        Vec4::new(1.0, 2.0, 0.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    );
    let b = Mat4::new(1.0);

    let mut product = a.clone();
    product.mult_mat4(&b);
    assert_eq!(product, a);

    assert_eq!(a * Vec4::new(1.0, 1.0, 0.0, 0.0), Vec4::new(3.0, 1.0, 0.0, 0.0));
}

#[test]
fn test_mult_mat4_mutates_receiver() {
    let mut m = sample_matrix();
    let n = Mat4::from_rows(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(1.0, 1.0, 1.0, 1.0),
    );
    let m_before = m;

    let returned: *const Mat4 = m.mult_mat4(&n);
    assert!(std::ptr::eq(returned, &m));

    // Reference product from the pre-call values.
    for i in 0..4 {
        for j in 0..4 {
            let mut expected = 0.0;
            for k in 0..4 {
                expected += m_before[i][k] * n[k][j];
            }
            assert_eq!(m[i][j], expected, "element ({}, {})", i, j);
        }
    }
}

#[test]
fn test_chained_mutation() {
    let mut m = sample_matrix();
    m.zero().identity().mult_mat4(&Mat4::new(3.0));
    assert_eq!(m, Mat4::new(3.0));
}

#[test]
fn test_row_assignment_replaces_whole_row() {
    let mut m = Mat4::new(1.0);
    let v = Vec4::new(9.0, 8.0, 7.0, 6.0);
    m[2] = v;
    assert_eq!(m.row(2), v);
    assert_eq!(m.column(0), Vec4::new(1.0, 0.0, 9.0, 0.0));
}
