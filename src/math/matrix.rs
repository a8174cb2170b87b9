use rand::prelude::*;
use serde::{Serialize, Deserialize};
use std::ops::{Add, Sub, Mul};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Uniform random entries in [-1, 1].
    pub fn random(rows: usize, cols: usize) -> Matrix {
        let mut rng = rand::thread_rng();
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }

        res
    }

    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data[0].len(),
            data
        }
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix::from_data(
            (self.data)
                .clone()
                .into_iter()
                .map(|row| row.into_iter().map(|x| functor(x)).collect())
                .collect()
        )
    }

    /// Maximum entry of each row, one value per row.
    /// Ties between entries are harmless; any shared maximum is returned.
    pub fn row_max(&self) -> Vec<f64> {
        self.data.iter()
            .map(|row| row.iter().cloned().fold(f64::NEG_INFINITY, f64::max))
            .collect()
    }

    /// Sum of each row, one value per row.
    pub fn row_sum(&self) -> Vec<f64> {
        self.data.iter()
            .map(|row| row.iter().sum())
            .collect()
    }

    /// Broadcast subtraction: subtracts `amounts[i]` from every entry of row i.
    pub fn sub_per_row(&self, amounts: &[f64]) -> Matrix {
        assert_eq!(amounts.len(), self.rows, "one scalar per row required");
        let data = self.data.iter().zip(amounts.iter())
            .map(|(row, a)| row.iter().map(|x| x - a).collect())
            .collect();
        Matrix::from_data(data)
    }

    /// Broadcast division: divides every entry of row i by `divisors[i]`.
    pub fn div_per_row(&self, divisors: &[f64]) -> Matrix {
        assert_eq!(divisors.len(), self.rows, "one scalar per row required");
        let data = self.data.iter().zip(divisors.iter())
            .map(|(row, d)| row.iter().map(|x| x / d).collect())
            .collect();
        Matrix::from_data(data)
    }

    /// Picks one entry per row: result[i] = self[i, cols[i]].
    pub fn gather(&self, cols: &[usize]) -> Vec<f64> {
        assert_eq!(cols.len(), self.rows, "one column index per row required");
        cols.iter().enumerate()
            .map(|(i, &j)| self.data[i][j])
            .collect()
    }

    /// Adds `value` at one position per row: self[i, cols[i]] += value.
    pub fn scatter_add(&mut self, cols: &[usize], value: f64) {
        assert_eq!(cols.len(), self.rows, "one column index per row required");
        for (i, &j) in cols.iter().enumerate() {
            self.data[i][j] += value;
        }
    }

    /// Sum of the squares of all entries.
    pub fn sum_of_squares(&self) -> f64 {
        self.data.iter().flatten()
            .map(|x| x * x)
            .sum()
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(x, y)| x + y).collect()
            })
            .collect();

        Matrix::from_data(data)
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let data = self.data.iter().zip(rhs.data.iter())
            .map(|(row_a, row_b)| {
                row_a.iter().zip(row_b.iter()).map(|(x, y)| x - y).collect()
            })
            .collect();

        Matrix::from_data(data)
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.cols != rhs.rows {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res =  Matrix::zeros(self.rows, rhs.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..self.cols {
                    sum += self.data[i][k] * rhs.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        res
    }
}
