//! Pure numeric predicates. All are total over `i32`, including 0,
//! negatives and `i32::MIN`.

/// 2 以上且只有 1 與自身兩個因數
pub fn is_prime(n: i32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    // 以 i64 計算 i*i，避免接近 i32::MAX 時溢位
    let n = i64::from(n);
    let mut i: i64 = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// 正整數且等於其真因數和
pub fn is_perfect(n: i32) -> bool {
    if n <= 1 {
        return false;
    }

    let n = i64::from(n);
    let mut sum: i64 = 1;
    let mut i: i64 = 2;
    while i * i <= n {
        if n % i == 0 {
            sum += i;
            let pair = n / i;
            if pair != i {
                sum += pair;
            }
        }
        i += 1;
    }
    sum == n
}

/// 以 |n| 判斷: 各位數的 d 次方和等於 |n|，d 為位數
pub fn is_armstrong(n: i32) -> bool {
    let magnitude = n.unsigned_abs();
    let digits = digits_of(magnitude);
    let power = digits.len() as u32;

    let sum: u64 = digits.iter().map(|&d| u64::from(d).pow(power)).sum();
    sum == u64::from(magnitude)
}

pub fn digit_sum(n: i32) -> u32 {
    digits_of(n.unsigned_abs()).iter().map(|&d| u32::from(d)).sum()
}

pub fn is_even(n: i32) -> bool {
    n % 2 == 0
}

fn digits_of(mut value: u32) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }

    let mut digits = Vec::with_capacity(10);
    while value > 0 {
        digits.push((value % 10) as u8);
        value /= 10;
    }
    digits.reverse();
    digits
}
