//! Fits a small linear model `y = x · w + b` with plain gradient descent.

use matgrad_core::{Graph, MatgradError, Matrix, Shape};

fn main() -> Result<(), MatgradError> {
    // 8 samples, 2 features, generated from w = [1.5, -0.5], b = 0.25.
    let inputs = Matrix::rand_uniform(Shape::new(8, 2), -1.0, 1.0)?;
    let true_w = Matrix::from_rows(vec![vec![1.5], vec![-0.5]])?;
    let targets = inputs.dot(&true_w)?.add_scalar(0.25);

    let mut graph = Graph::new();
    let x = graph.constant(inputs);
    let y = graph.constant(targets);
    let w = graph.variable("w", Matrix::randn(Shape::new(2, 1))?);
    let b = graph.variable("b", Matrix::<f64>::zeros(Shape::new(1, 1)));

    let xw = graph.matmul(x, w);
    let ones = graph.constant(Matrix::<f64>::ones(Shape::new(8, 1)));
    let bias = graph.matmul(ones, b);
    let prediction = graph.add(xw, bias);
    let error = graph.sub(prediction, y);
    let squared = graph.pow_scalar(error, 2.0);
    let loss = graph.div_scalar(squared, 8.0);

    let learning_rate = 0.2;
    for epoch in 0..300 {
        let loss_value = graph.forward(loss)?.sum().item()?;
        graph.backward(loss)?;

        for param in [w, b] {
            let grad = graph
                .grad(param)
                .cloned()
                .ok_or(MatgradError::GradientNotComputed { node: param })?;
            let next = graph.variable_value(param)?.sub(&grad.mul_scalar(learning_rate))?;
            graph.set_value(param, next)?;
        }

        if epoch % 50 == 0 {
            println!("epoch {:>3}: loss = {:.6}", epoch, loss_value);
        }
    }

    println!("learned w = {}", graph.variable_value(w)?);
    println!("learned b = {}", graph.variable_value(b)?);
    Ok(())
}
