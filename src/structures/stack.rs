//! Stack - LIFO structure backed by Vec, plus the classic stack
//! applications (balanced brackets, postfix expressions, monotonic
//! stacks).
//!
//! Variables:
//!   data : Vec<T>  - backing storage
//!   N    : usize   - current number of elements = data.len()
//!
//! Equations:
//!   push(x): data[N] = x,  N' = N + 1        O(1) amortised
//!   pop():   N' = N - 1,   returns data[N-1] O(1)
//!   peek():  returns &data[N-1]              O(1)

use thiserror::Error;

pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn push(&mut self, val: T) {
        self.data.push(val);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.last()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether every bracket in `expr` closes in the right order.
pub fn is_balanced(expr: &str) -> bool {
    let mut stack = Stack::new();
    for c in expr.chars() {
        match c {
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(expected) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("operand missing for operator `{0}`")]
    MissingOperand(char),
    #[error("unknown token `{0}`")]
    UnknownToken(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("leftover operands after evaluation")]
    LeftoverOperands,
}

/// Evaluate a whitespace-separated postfix expression over integers.
pub fn evaluate_postfix(expr: &str) -> Result<i64, EvalError> {
    let mut stack: Vec<i64> = Vec::new();
    for token in expr.split_whitespace() {
        match token {
            "+" | "-" | "*" | "/" => {
                let op = token.chars().next().unwrap_or('?');
                let b = stack.pop().ok_or(EvalError::MissingOperand(op))?;
                let a = stack.pop().ok_or(EvalError::MissingOperand(op))?;
                let v = match token {
                    "+" => a + b,
                    "-" => a - b,
                    "*" => a * b,
                    _ => {
                        if b == 0 {
                            return Err(EvalError::DivisionByZero);
                        }
                        a / b
                    }
                };
                stack.push(v);
            }
            _ => {
                let v = token
                    .parse::<i64>()
                    .map_err(|_| EvalError::UnknownToken(token.to_string()))?;
                stack.push(v);
            }
        }
    }
    match (stack.pop(), stack.is_empty()) {
        (Some(v), true) => Ok(v),
        (Some(_), false) => Err(EvalError::LeftoverOperands),
        (None, _) => Err(EvalError::MissingOperand('?')),
    }
}

/// Convert an infix expression (single-char tokens, `+ - * / ^` and
/// parentheses) to postfix with a space between tokens.
pub fn infix_to_postfix(expr: &str) -> Result<String, EvalError> {
    fn precedence(op: char) -> u8 {
        match op {
            '+' | '-' => 1,
            '*' | '/' => 2,
            '^' => 3,
            _ => 0,
        }
    }

    let mut output: Vec<String> = Vec::new();
    let mut ops: Vec<char> = Vec::new();
    let mut number = String::new();

    for c in expr.chars() {
        if c.is_ascii_digit() {
            number.push(c);
            continue;
        }
        if !number.is_empty() {
            output.push(std::mem::take(&mut number));
        }
        match c {
            ' ' => {}
            '(' => ops.push(c),
            ')' => {
                while let Some(&top) = ops.last() {
                    if top == '(' {
                        break;
                    }
                    output.push(top.to_string());
                    ops.pop();
                }
                if ops.pop() != Some('(') {
                    return Err(EvalError::UnknownToken(")".to_string()));
                }
            }
            '+' | '-' | '*' | '/' | '^' => {
                while let Some(&top) = ops.last() {
                    if top == '(' || precedence(top) < precedence(c) {
                        break;
                    }
                    output.push(top.to_string());
                    ops.pop();
                }
                ops.push(c);
            }
            _ => return Err(EvalError::UnknownToken(c.to_string())),
        }
    }
    if !number.is_empty() {
        output.push(number);
    }
    while let Some(op) = ops.pop() {
        if op == '(' {
            return Err(EvalError::UnknownToken("(".to_string()));
        }
        output.push(op.to_string());
    }
    Ok(output.join(" "))
}

/// For each element, the next element to its right that is strictly
/// greater, or None. Monotonic decreasing stack of indices.
pub fn next_greater_elements(arr: &[i64]) -> Vec<Option<i64>> {
    let mut result = vec![None; arr.len()];
    let mut stack: Vec<usize> = Vec::new();
    for (i, &v) in arr.iter().enumerate() {
        while stack.last().is_some_and(|&top| arr[top] < v) {
            if let Some(top) = stack.pop() {
                result[top] = Some(v);
            }
        }
        stack.push(i);
    }
    result
}

/// Area of the largest rectangle under a histogram. Each bar is extended
/// left and right to the nearest shorter bar.
pub fn largest_rectangle(heights: &[u64]) -> u64 {
    let mut best = 0;
    let mut stack: Vec<usize> = Vec::new();
    for i in 0..=heights.len() {
        let h = heights.get(i).copied().unwrap_or(0);
        while stack.last().is_some_and(|&top| heights[top] >= h) {
            if let Some(top) = stack.pop() {
                let height = heights[top];
                let width = match stack.last() {
                    Some(&left) => i - left - 1,
                    None => i,
                };
                best = best.max(height * width as u64);
            }
        }
        stack.push(i);
    }
    best
}
