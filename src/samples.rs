//! Built-in demo snippets, one per supported language.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::language::Language;

/// A demo snippet with a short description.
pub struct Sample {
    pub language: Language,
    pub description: &'static str,
    pub content: &'static str,
}

/// All built-in samples, in display order.
pub static SAMPLES: &[Sample] = &[
    Sample {
        language: Language::Java,
        description: "Sum the integers 1..n read from stdin",
        content: r#"import java.util.*;

public class Main {
  public static void main(String[] args) {
    Scanner sc = new Scanner(System.in);
    int n = sc.nextInt();
    int sum = 0;
    for (int i = 1; i <= n; i++) {
      sum += i;
    }
    System.out.println("Sum is " + sum);
  }
}"#,
    },
    Sample {
        language: Language::Python,
        description: "Recursive factorial",
        content: r#"def factorial(n):
    if n <= 1:
        return 1
    return n * factorial(n - 1)

num = int(input())
print(factorial(num))"#,
    },
    Sample {
        language: Language::C,
        description: "Count the divisors of n",
        content: r#"#include <stdio.h>

int main() {
  int n;
  scanf("%d", &n);
  int count = 0;
  for (int i = 1; i <= n; i++) {
    if (n % i == 0) {
      count++;
    }
  }
  printf("Divisors: %d", count);
  return 0;
}"#,
    },
    Sample {
        language: Language::Cpp,
        description: "Find the maximum of a vector",
        content: r#"#include <iostream>
#include <vector>
using namespace std;

int main() {
  int n;
  cin >> n;
  vector<int> data(n);
  for (int i = 0; i < n; i++) cin >> data[i];
  int best = data[0];
  for (int value : data) {
    if (value > best) best = value;
  }
  cout << "Max is " << best;
  return 0;
}"#,
    },
    Sample {
        language: Language::Javascript,
        description: "Primality test",
        content: r#"function isPrime(n) {
  if (n <= 1) return false;
  for (let i = 2; i * i <= n; i++) {
    if (n % i === 0) return false;
  }
  return true;
}

const input = 17;
console.log(isPrime(input));"#,
    },
];

static SAMPLE_MAP: Lazy<HashMap<Language, &'static Sample>> =
    Lazy::new(|| SAMPLES.iter().map(|s| (s.language, s)).collect());

/// Look up the sample for a language tag. `Other` has no sample.
pub fn for_language(language: Language) -> Option<&'static Sample> {
    SAMPLE_MAP.get(&language).copied()
}
